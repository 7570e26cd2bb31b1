/*!
# Introductory Tutorial for Minim

Minim programs are plain text files. Write the following into
`hello.mm` and run it with `minim hello.mm`.

<pre><code>&nbsp;$< "Hello World\n".
</code></pre>

<pre><code>&nbsp;  Hello World
</code></pre>

The `$` marker means text and `<` points out of the program, so `$<`
prints characters. The string is really an array of character codes
ending in a zero, and text output stops at that zero. Every statement
ends with a period.

Numbers print with `#<`.

<pre><code>&nbsp;#< 6 * 7. $< '\n'.
</code></pre>

<pre><code>&nbsp;  42
</code></pre>

## Memory

There are no variables. The program reads and writes numbered cells of
the current memory scope with square brackets. Every cell starts as the
integer zero.

<pre><code>&nbsp;[0] = 5.
&nbsp;[1] = [0] * 2.
&nbsp;#< [1].
</code></pre>

## Labels

Control flow is built from labels. `_> 1.` marks a spot named 1 and
`_< 1.` goes there. `_? test.` skips the following statement when the
test is true. Here is a loop that counts to ten.

<pre><code>&nbsp;[0] = 1.
&nbsp;_> 1.
&nbsp;#< [0]++. $< ' '.
&nbsp;_? [0] > 10. _< 1.
</code></pre>

<pre><code>&nbsp;  1 2 3 4 5 6 7 8 9 10
</code></pre>

The program stops when it runs past its last statement. Stop a running
program with CTRL-C.

## Input

`#>` reads a number from a line of input into a cell and `$>` reads a
single character code. Unfinished output lines become the prompt.

<pre><code>&nbsp;$< "Number? ". #> [0].
&nbsp;#< [0] * [0]. $< '\n'.
</code></pre>

The chapters that follow cover expressions, memory and statements in
detail. Appendix A lists the system commands.
*/
