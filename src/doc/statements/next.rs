/*!
# `NEXT <variable>`
Also see `FOR`

## Purpose
Used to indicate the end of a `FOR` loop.

## Remarks
Loops are tracked by variable name, so using `GOTO` to leave a loop
early is safe. The variable is always required.
A `NEXT` for a variable with no running loop is `NEXT WITHOUT FOR`.

## Example
```text
10 FOR I=1 TO 3:PRINT I;:NEXT I
RUN
123
```

*/
