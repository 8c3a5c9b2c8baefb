/*!
# `DATA <literal>[,<literal>...]`

## Purpose
`DATA` defines a list of constants to be read in sequentially.

## Remarks
Fields are collected from every `DATA` statement when the program loads,
in the order they appear in the source. `DATA` never executes.
Quoted fields may contain commas. An unquoted field read into a string
variable is taken as written. A field read into a numeric variable is
evaluated like the right side of `LET`, so a bad number fails at
`READ` time, not when the program loads.

## Example
```text
10 READ A$,A
20 PRINT A$;" ";A
30 DATA "NUGGET",3
RUN
NUGGET 3
```

*/
