/*!
# Chapter 2: Memory

A memory scope is a fixed number of cells, 1024 unless the `-m` option
says otherwise. `&+.` pushes a fresh zero-filled scope and `&-.` pops
back to the previous one. The bottom scope is never popped.

## Addresses

| Address | Cells |
|---|---|
| `[i]` | cell `i` |
| `[-1]` | the last cell |
| `[s:e]` | `s` up to but not including `e` |
| `[s:e:st]` | every `st`th cell from `s` |
| `[s:+n]` | `n` cells starting at `s` |
| `[s:+n:st]` | `n` cells starting at `s`, `st` apart |

Negative indexes count from the end, once. A missing start or end of a
fixed range means the whole scope in that direction. A negative step
walks the range backwards, so `[5:2:-1]` is cells 5, 4 and 3. Fixed
ranges are checked against the scope immediately. Relative ranges are
only checked when a cell is used, but never hold more cells than a
scope.

## Assignment

Assigning a number to a range fills every cell. Assigning an array
copies element by element until either side runs out. Assigning an
array to a single cell takes the first element.

<pre><code>&nbsp;[0:3] = 9.
&nbsp;[10:+4] = "abc".
&nbsp;#< [0:4]. $< '\n'.
</code></pre>

<pre><code>&nbsp;  {9, 9, 9, 0}
</code></pre>

## Transfer between scopes

The transfer queue moves values across a scope change. `&<` enqueues
values, `&>` dequeues them into cells and `&!.` empties the queue.

<pre><code>&nbsp;[0] = 7.
&nbsp;&< [0]. &+.
&nbsp;&> [0]. #< [0].
</code></pre>

Cells from a popped scope can no longer be used, even through a range
that was created before the pop.
*/
