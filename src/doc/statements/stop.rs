/*!
# `STOP`

## Purpose
Stop the program.

## Remarks
Typically used for debugging. The run ends as stopped rather than
completed. Variables are kept, so a later run starting from
another line can pick up where it left off.

## Example
```text
10 A=1
20 STOP
30 PRINT A
```

*/
