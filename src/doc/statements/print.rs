/*!
# `PRINT [<expression>[;<expression>...]][;]`
Also `? [<expression>...]`.

## Purpose
Output information for the operator.

## Remarks
A `PRINT` by itself outputs a newline (ASCII 10).
To suppress the newline, use a semicolon (;) at the end.
Expressions separated by semicolons print with nothing between them.
Numbers print with up to six significant digits.

## Example
```text
PRINT "ONE THIRD IS ";1/3
ONE THIRD IS 0.333333
```

*/
