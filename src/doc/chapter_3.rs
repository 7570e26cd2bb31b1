/*!
# Chapter 3: Statements

| Statement | |
|---|---|
| `#< expr.` | print a number or array |
| `#<< expr.` | print as integer |
| `#> target.` | read a number from input |
| `#>> target.` | read an integer from input |
| `$< expr.` | print characters up to a zero |
| `$> target.` | read one character code |
| `$!.` | discard unread characters |
| `_> id.` | define label `id` |
| `_< id.` | go to label `id` |
| `_< id, fallback.` | go to `id`, or `fallback` when it is missing |
| `_? test.` | skip the next statement when `test` is true |
| `_<< id.` | go to `id` and remember where we came from |
| `_>>.` | return to the statement after the last `_<<` |
| `@< expr.` | push a system command argument |
| `@> target.` | run a system command |
| `@!.` | discard system arguments and results |
| `&+.` `&-.` | push or pop a memory scope |
| `&< expr.` `&> target.` `&!.` | transfer queue |
| `.` | do nothing |

## Labels

Label ids are numbers and compare by value, so `1` and `1.0` are the
same label. A label is found by scanning the program the first time it
is used; later uses go straight to it. A label may be defined again
while the program runs, which moves it.

The counter `c` is the index of the current statement. Writing to it is
a jump. Going below zero is an error.

## Input

Input is read a line at a time. `#>` parses the whole line as a number
and `$>` takes characters one at a time, ending every line with a
zero. When input is exhausted both leave their target alone.

## Comments

A `;` starts a comment running to the end of the line. A backslash at
the end of a comment line continues the comment onto the next line.
*/
