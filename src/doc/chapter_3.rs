/*!
# Functions

Functions bind tighter than any operator, so `SQR(4)+1` is 3.
The argument needs no parentheses: `SQR 4` works too.
*/

pub mod ABS {
    /*!
    ## `ABS(X)` Returns the absolute value of X.
    ```text
    PRINT ABS(-0.123)
    0.123
    ```
    */
}

pub mod ASC {
    /*!
    ## `ASC(X$)` Returns the unicode value of the first character of X$.
    An empty string is an `ILLEGAL FUNCTION CALL`.
    ```text
    PRINT ASC("A")
    65
    ```
    */
}

pub mod ATN {
    /*!
    ## `ATN(X)` Returns the arctangent of X in radians.
    ```text
    PRINT ATN(1)*4
    3.14159
    ```
    */
}

pub mod CHR {
    /*!
    ## `CHR$(X)` Returns a one character string with the unicode value X.
    ```text
    PRINT CHR$(65)
    A
    ```
    */
}

pub mod COS {
    /*!
    ## `COS(X)` Returns the cosine of X radians.
    ```text
    PRINT COS(0)
    1
    ```
    */
}

pub mod DATE {
    /*!
    ## `DATE$` Returns the local date as MM-DD-YYYY.
    ```text
    PRINT DATE$
    10-19-2026
    ```
    */
}

pub mod EXP {
    /*!
    ## `EXP(X)` Returns e to the power of X.
    Results too large to represent are an `OVERFLOW`.
    ```text
    PRINT EXP(1)
    2.71828
    ```
    */
}

pub mod INT {
    /*!
    ## `INT(X)` Returns the largest integer less than or equal to X.
    ```text
    PRINT INT(-2.5);" ";INT(2.5)
    -3 2
    ```
    */
}

pub mod LEN {
    /*!
    ## `LEN(X$)` Returns the number of characters in X$.
    ```text
    PRINT LEN("HELLO")
    5
    ```
    */
}

pub mod LOG {
    /*!
    ## `LOG(X)` Returns the natural logarithm of X.
    X must be greater than zero.
    ```text
    PRINT LOG(EXP(2))
    2
    ```
    */
}

pub mod PI {
    /*!
    ## `PI` Returns the ratio of a circle's circumference to its diameter.
    ```text
    PRINT PI
    3.14159
    ```
    */
}

pub mod RND {
    /*!
    ## `RND` Returns a random number from 0 up to but not including 1.
    A new number is drawn every time `RND` is evaluated.
    ```text
    PRINT INT(RND*6)+1
    4
    ```
    */
}

pub mod SGN {
    /*!
    ## `SGN(X)` Returns 1 for positive X, -1 for negative X, and 0 for zero.
    ```text
    PRINT SGN(-7)
    -1
    ```
    */
}

pub mod SIN {
    /*!
    ## `SIN(X)` Returns the sine of X radians.
    ```text
    PRINT SIN(PI/2)
    1
    ```
    */
}

pub mod SQR {
    /*!
    ## `SQR(X)` Returns the square root of X.
    A negative X is an `ILLEGAL FUNCTION CALL`.
    ```text
    PRINT SQR(16)
    4
    ```
    */
}

pub mod STR {
    /*!
    ## `STR$(X)` Returns X formatted the way `PRINT` shows it.
    ```text
    PRINT STR$(1/4)+"!"
    0.25!
    ```
    */
}

pub mod TAN {
    /*!
    ## `TAN(X)` Returns the tangent of X radians.
    ```text
    PRINT TAN(0)
    0
    ```
    */
}

pub mod TIME {
    /*!
    ## `TIME$` Returns the local time as HH:MM:SS.
    ```text
    PRINT TIME$
    13:37:00
    ```
    */
}

pub mod VAL {
    /*!
    ## `VAL(X$)` Returns the number in X$, or 0 when X$ is not a number.
    ```text
    PRINT VAL(" 2.5 ")+VAL("ABC")
    2.5
    ```
    */
}
