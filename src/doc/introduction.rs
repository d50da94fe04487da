/*!
# Introduction to WWIV Menus

Every screen a caller navigates on the board is a menu. A menu is a small
file written by the sysop with the menu editor. It holds a header that
says who may enter the menu and how it behaves, followed by a list of
items. Each item has a key the caller types and a short script that runs
when the key is pressed.

Menus are grouped into menu sets. A menu set is a directory under the
menu root and it must contain a menu named `main`. Callers pick the set
they like and start in its `main` menu.

```text
menus/
    descript.ion
    wwiv/
        main.mnu
        main.pro
        main.ans
        files.mnu
    classic/
        main.mnu
```

The `descript.ion` file gives each menu set a one line description:

```text
wwiv the default menus
classic old school look
```

## Trying a Menu Set

The `menus` executable runs a menu set from your console as the local
operator. Point it at the menu root and give yourself a security level.

<pre><code>&nbsp;$ menus --menus ./menus --set wwiv --sl 255 --dsl 255 --sysop
</code></pre>

Commands your menus name are echoed instead of run, so you can walk a
menu set and check every key does what you expect. `Logoff` or CTRL-C
ends the session. Set `RUST_LOG=debug` to watch menus being opened and
closed.

## What Happens in a Menu

When a menu opens, the caller's access is checked against the header. If
the header allows it, the entry script runs. Then the menu loops:

 1. Novices see the menu help every time. Experts only see it when the
    header forces help, or once on entrance if the header asks for that.
 2. The prompt is shown. It comes from `<menu>.pro` when that file
    exists. Only the text before `.end.` is used, so you can keep notes
    after the marker.
 3. The caller types a command.
 4. Every item with a matching key that the caller may use runs, in the
    order the items appear in the file.

The menu ends when a script runs `ReturnFromMenu`. The exit script runs
once and the caller is back in the menu that called this one.

Help comes from `<menu>.ans` for color ANSI callers, `<menu>.b&w` for
ANSI callers without color and `<menu>.msg` for everyone else. When none
of those exist the menu is listed for the caller from the item keys and
menu text.

*/
