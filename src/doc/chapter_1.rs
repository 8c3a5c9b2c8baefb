/*!
# Expressions and Types

There are two types of data: numbers and strings. Variable names
consist of an ASCII letter followed by ASCII letters or digits.
A name ending in `$` holds a string; any other name holds a number.
A variable never changes type. Storing a string in `A` or a number
in `A$` is a `TYPE MISMATCH`.

```text
LET A = 3.14
B$ = "PIE"
```

Reading a variable that was never assigned is `UNDEFINED VARIABLE`.

Numbers are double precision. They print with up to six significant
digits, switching to scientific notation for very large or very small
values.

String literals are enclosed in double quotes. Two double quotes in
a row are one quote character inside the string.

```text
PRINT "SHE SAID ""HI"""
SHE SAID "HI"
```

## Operators
From highest to lowest precedence:

| Operators | Notes |
|-----------|-------|
| functions, unary `-` | |
| `^` `*` `/` | |
| `+` `-` | |
| `=` `<>` `<` `<=` `=<` `>` `>=` `=>` | 1 when true, 0 when false |
| `NOT` | |
| `AND` `OR` `NOR` | any nonzero number is true |

Operators of equal precedence evaluate left to right.

```text
PRINT 2+3*4;" ";(2+3)*4;" ";2^3^2
14 20 64
```

Two strings may be joined with `+`. A string and a number multiplied
with `*` repeat the string.

```text
PRINT "AB"+"C";" ";"AB"*3
ABC ABABAB
```

Any other operator between a string and anything is a `TYPE MISMATCH`,
including comparisons. Division by zero is `DIVISION BY ZERO`.

*/
