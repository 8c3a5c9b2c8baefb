/*!
# Errors

Errors found while loading stop the load; no part of the program runs.
Errors found while running stop the run immediately. Variables keep
whatever values they had when the error happened.

An error prints as its name, then `IN` and the line number when there
is one, then the columns of the expression at fault, then any detail.

```text
10 PRINT 1 + X
RUN
UNDEFINED VARIABLE IN 10 (4..5); X
```

| Error | Cause |
|-------|-------|
| `NEXT WITHOUT FOR` | `NEXT` names a variable with no running loop. |
| `SYNTAX ERROR` | Malformed statement, expression, or line number. Also an unknown statement, but only when it runs. |
| `RETURN WITHOUT GOSUB` | `RETURN` with no `GOSUB` waiting. |
| `OUT OF DATA` | `READ` past the last `DATA` field. |
| `ILLEGAL FUNCTION CALL` | A function argument out of range, or `STEP 0`. |
| `OVERFLOW` | A result too large to represent, or a line number too large. |
| `OUT OF MEMORY` | A line too long, too many variables, or nesting too deep. |
| `UNDEFINED LINE` | `GOTO`, `GOSUB`, `THEN`, or `RESTORE` to a missing line. |
| `DIVISION BY ZERO` | Dividing by zero, or zero to a negative power. |
| `TYPE MISMATCH` | A string where a number belongs, or the reverse. |
| `STRING TOO LONG` | A string over 65535 bytes. |
| `MISSING OPERAND` | An operator without enough values, like `1 +`. |
| `UNDEFINED VARIABLE` | Reading a variable that was never assigned. |
| `INPUT PAST END` | `INPUT` after the input ran out. |

*/
