/*!
# `[LET] <variable>=<expression>`

## Purpose
Assign a value to the variable.

## Remarks
The word `LET` is optional.
The value must match the type of the variable.

## Example
```text
10 A = 10
20 PRINT A
30 LET A = 20
40 PRINT A
RUN
10
20
```

*/
