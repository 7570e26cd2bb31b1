/*!
# Appendix A: System Commands

A system command is called by name. Store the name as a string in
memory, push the index of its first cell with `@<`, then push the
arguments. `@>` runs the command and moves results into its target.
Results are queued, so a longer target takes more of them and `@>`
without a command name only collects what is left.

<pre><code>&nbsp;[0:+5] = "sqrt".
&nbsp;@< 0. @< 16. @> [10].
&nbsp;#< [10].
</code></pre>

| Command | Arguments | Result |
|---|---|---|
| `abs sign floor ceil round trunc` | 1 | same kind as the argument |
| `sqrt cbrt exp ln log log2` | 1 | float |
| `sin cos tan asin acos atan sinh cosh tanh` | 1 | float |
| `pow atan2 hypot` | 2 | float |
| `min max` | 2 | kind of the first argument |
| `isalpha isdigit isalnum isspace isupper islower ispunct iscntrl isxdigit` | 1 | 1 or 0 |
| `toupper tolower` | 1 | character code |
| `rand` | 0 | float between 0 and 1 |
| `randint` | 2 | integer between the two, inclusive |
| `clock` | 0 | seconds since the program started |
| `date` | 0 | year, month, day, hour, minute, second |
| `wait` | 1 | nothing; pauses for milliseconds |

Calling a command with the wrong number of arguments or an unknown name
is an error.
*/
