/*!
# Security

Both the menu header and each item carry a security policy. The header
decides who may enter the menu. An item decides who may see it in the
generated menu and who may run it.

| Setting | Meaning |
|---|---|
| SL, DSL | The caller's levels must be at least the minimum. Items may also set a maximum. Zero means no maximum. |
| AR, DAR | The caller must hold every bit that is set. |
| Restrict | The caller must hold none of the bits that are set. |
| Sysop, Co-Sysop | Only callers with that status. |
| Password | Remote callers are asked for it before entering or running. |

Headers are more forgiving than items. A caller missing a DAR bit, or
holding a restriction bit, still enters a menu when their DSL meets the
header's minimum DSL. Items have no such exception.

## Passwords

Passwords are compared without regard to case. A password of `*SYSTEM`
asks for the system password instead. The local operator is never
asked.

## Sysop Log

Refused menus and items leave a trail in the sysop log.

```text
*MENU* : < Menu Sec
*MENU* : < item security : G
```

The header's logging mode decides what else is written each time a
caller selects an item: nothing, the key typed, the script run, or the
item's menu text.

*/
