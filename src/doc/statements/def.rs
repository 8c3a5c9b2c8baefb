/*!
# `DEF FN<name>[(<parameter>[,<parameter>...])] = <expression>`

## Purpose
Define a custom user function for use in other expressions.

## Remarks
The definition takes effect when the `DEF` statement runs.
Each argument is evaluated, then its value is written into the
expression in place of the parameter. The result must match the
type of the function name, so `FNA$` returns a string.
User functions may call other user functions. Calls nested more than
64 deep fail with `OUT OF MEMORY`.

## Example
```text
10 DEF FNDEG(R)=R*180/PI
20 PRINT FNDEG(PI/4)
RUN
45
```
*/
