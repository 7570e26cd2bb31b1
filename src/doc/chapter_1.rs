/*!
# Chapter 1: Expressions

## Numbers

A number is either an integer (32 bits) or a float (single precision).
Literals without a fraction or exponent are integers unless they are too
large, in which case they become floats. Exponents are unsigned, so
`1e5` is valid and `1e-5` is not; write `1 / 1e5` instead.

| Literal | Value |
|---|---|
| `T` | integer 1 |
| `F` | integer 0 |
| `N` | float NaN |
| `I` | float infinity |
| `P` | float π |
| `E` | float e |
| `'a'` | integer character code 97 |
| `"ab"` | the array `{97, 98, 0}` |

Character and string escapes are `\\ \' \" \0 \a \b \f \n \r \t \v`,
`\xXX` and `\uXXXX`.

The lowercase letters are dynamic. `a` is the program arguments as a
string array, `c` is the statement counter, `r` is a fresh random float
between 0 and 1, and `m` is the number of cells in a memory scope.

## Mixed arithmetic

The left operand decides the kind of the result. `3 + 2.5` is the
integer 5 and `3.5 + 2` is the float 5.5. Integer arithmetic wraps
around on overflow and integer division by zero is an error. Comparisons
and logical operators answer 1 or 0 of the left operand's kind.

## Operators

From lowest to highest precedence.

| Operators | |
|---|---|
| `= += -= *= /= %= &= \|= ^= <<= >>= >>>=` | assignment, right to left |
| `? :` | ternary |
| `\|\| \|` | or, logical and bitwise |
| `^^ ^` | exclusive or |
| `&& &` | and |
| `== !=` | equality |
| `< <= > >=` | comparison |
| `<< >> >>>` | shift, `>>>` fills with zeros |
| `+ -` | additive |
| `* / %` | multiplicative |
| `- ! !! ~ ++ --` | prefix |
| `++ -- ! !! ~ :f :i :s` | postfix |

Only `||` and `&&` skip evaluating their right side. `!!` narrows a
value to 1 or 0 and `~` inverts its bits. The prefix forms of `!`, `!!`
and `~` produce a new value; the postfix forms change the cell in place
and answer the old value, just like postfix `++`.

The casts `:f` and `:i` convert a number. `:s` turns a number into the
string of its digits.

<pre><code>&nbsp;$< 42:s.
</code></pre>
*/
