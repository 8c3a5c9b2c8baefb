/*!
# `IF <expression> THEN <statement>`
Also `IF <expression> THEN <line number>`.

## Purpose
Do something contingent on a predicate.

## Remarks
Any nonzero number is true. A string condition is a `TYPE MISMATCH`.
The statement after `THEN` may be any statement except `DATA`,
including another `IF`. A bare line number is a `GOTO`.
Only one statement belongs to the `THEN`; statements after a colon
always run.

## Example
```text
10 A=10
20 IF A<30 THEN GOSUB 100
30 IF A<30 THEN 20
90 END
100 PRINT A:A=A+10:RETURN
RUN
10
20
```

*/
