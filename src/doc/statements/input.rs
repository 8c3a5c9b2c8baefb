/*!
# `INPUT ["<prompt string>";]<variable>`

## Purpose
Suspends execution and awaits a line of input.

## Remarks
Without a prompt string the default prompt `? ` is shown.
A string variable receives the line as typed.
A numeric variable requires a number, otherwise `TYPE MISMATCH`.
Running out of input is `INPUT PAST END`.

## Example
```text
10 INPUT "WHAT IS YOUR NAME? "; NAME$
20 INPUT AGE
```

*/
