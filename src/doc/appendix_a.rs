/*!
# Appendix A: Menu File Layout

A `.mnu` file is a run of 552 byte records. Record 0 is the header and
every following record is an item. Numbers are little-endian. Text is
one byte per character and ends with a NUL inside its field.

## Header

| Offset | Size | Field |
|---|---|---|
| 0 | 10 | signature, `WWIV430` |
| 10 | 2 | version |
| 12 | 2 | header byte count |
| 14 | 2 | body byte count |
| 16 | 1 | flags: 1 deleted, 2 main menu |
| 18 | 1 | numbers mode: 0 none, 1 sub, 2 dir |
| 19 | 1 | logging: 0 none, 1 key, 2 command, 3 description |
| 20 | 1 | force help: 0 no, 1 always, 2 on entrance |
| 21 | 1 | menu type: 0 regular, 1 pulldown, 2 both |
| 22 | 13 | pulldown colors |
| 35 | 21 | pulldown title |
| 116 | 21 | password |
| 137 | 10 | min SL, min DSL, AR, DAR, restrict |
| 147 | 2 | sysop, co-sysop |
| 179 | 101 | entry script |
| 280 | 101 | exit script |

## Item

| Offset | Size | Field |
|---|---|---|
| 0 | 1 | flags: 1 deleted |
| 1 | 11 | key |
| 12 | 101 | script |
| 113 | 41 | menu text |
| 154 | 41 | pulldown text |
| 195 | 81 | help text |
| 276 | 51 | sysop log text |
| 327 | 81 | instance message |
| 408 | 14 | min SL, max SL, min DSL, max DSL, AR, DAR, restrict |
| 422 | 2 | sysop, co-sysop |
| 424 | 21 | password |
| 445 | 1 | hide from: 0 none, 1 pulldown, 2 regular, 3 both |
| 446 | 1 | pulldown flags |
| 447 | 13 | extended help file |

*/
