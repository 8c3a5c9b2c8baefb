/*!
# `REM <anything>` or `' <anything>`

## Purpose
Embeds non-executing remarks into the program source code.

## Remarks
Remarks do nothing. A colon inside a remark still starts a new statement.

## Example
```text
10 REM Authored by Zaphod
20 PRINT 42
RUN
42
```

*/
