/*!
# Introduction

A program is a list of numbered lines. Each line holds one or more
statements separated by colons. Lines run in numeric order no matter
what order they were written in.

```text
20 PRINT "WORLD"
10 PRINT "HELLO ";
```

Running this program prints `HELLO WORLD`.

Keywords and variable names may be typed in any case. Names are
converted to uppercase, so `total` and `TOTAL` are the same variable.
Keywords are reserved words: a variable can't be named `NOR`, and
a name beginning with a function keyword such as `SINGLE` is read
as `SIN` followed by `GLE`.

A run ends in one of four ways. It completes by running past the last
line or reaching `END`. It stops at `STOP`. It is interrupted by CTRL-C.
Or it fails with an error naming the line and statement at fault.

```text
10 PRINT 1/0
RUN
DIVISION BY ZERO IN 10
```

Variables survive from one run to the next. Loops, subroutine returns,
and the `DATA` pointer do not. This lets a program that stopped be
continued by running it again from a later line.

*/
