/*!
# `END`

## Purpose
Immediately and unconditionally stop running the program.

## Remarks
Variables are left intact for inspection.
`END` at the end of a program is optional.
The run completes normally.

## Example
```text
10 PRINT "HELLO"
20 END
30 PRINT "THIS DOES NOT PRINT"
RUN
HELLO
```

*/
