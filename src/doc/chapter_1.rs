/*!
# The Script Language

A script is a line of up to 250 characters made of statements separated
by `~`. Each statement names a command and gives it up to two
parameters. There are two ways to write a statement.

```text
PrintFile welcome yes
PrintFile("welcome", "yes")
```

Command names are letters and digits. Only the first 30 characters are
kept. Parameters keep at most 50 characters each.

Quoted parameters may hold spaces.

```text
SetMsgConf("General Chat", "")
```

Unquoted parameters end at a space or a `~`. Commas and parentheses are
part of an unquoted parameter, so always quote parameters inside
parentheses.

```text
MENU(files, x)      ' parameter one is "files," and two is "x)"
MENU("files", "x")  ' what you meant
```

Statements run left to right.

```text
ClearScreen~PrintFile logon~Pause
```

## Built-in Commands

These commands are handled by the menu engine itself. Case does not
matter.

 * `MENU name` enters the menu `name` from the same menu set. When that
   menu returns, the rest of the calling script carries on.
 * `ReturnFromMenu` runs the exit script and leaves the menu.
 * `DisplayHelp` shows the menu help to an expert caller.

Every other command is passed to the board. When a command table is
loaded from `menucmds.dat`, names missing from it are logged as not
recognized and skipped.

## Mistakes

A script with bad punctuation still runs as well as it can. The problem
goes to the sysop log along with the script so you can find it.

```text
*MENU* : Unexpected end of line (wanted a close parentheses)
*MENU* : MENU("files"
```

## Numbers

When a menu header sets numbers mode, a caller who types only digits
runs `SetSubNumber n` or `SetDirNumber n` instead of any item. Leading
zeros are dropped.

*/
