//! Fixture programs

use super::builders::*;
use spa_engine::shared::{Expr, Program};

/// ```text
/// procedure main {
/// 1  read num1;
/// 2  read num2;
/// 3  read num3;
/// 4  sum = (num1 + num2) * num3;
/// 5  ave = sum / 3;
/// 6  print ave; }
/// ```
pub fn fixture_average() -> Program {
    ProgramBuilder::new()
        .procedure(
            "main",
            vec![
                read(1, "num1"),
                read(2, "num2"),
                read(3, "num3"),
                assign(4, "sum", mul(add(var("num1"), var("num2")), var("num3"))),
                assign(5, "ave", div(var("sum"), Expr::Const(3))),
                print(6, "ave"),
            ],
        )
        .build()
}

/// ```text
/// procedure main {
/// 1-6    read i; read j; read x; sum = 0; count = 0; print i;
/// 7      while (i > 0) {
/// 8-10     sum = sum + i; count = count + 1; print sum;
/// 11       if (x > 0) then { 12  x = x + i; } else { 13  read x; }
/// 14       i = i + x; }
/// 15-18  print count; j = j + count; read y; print y;
/// 19     while (j > 0) { 20  j = j + y;  21  print j; }
/// 22     print sum; }
/// ```
pub fn fixture_nesting() -> Program {
    ProgramBuilder::new()
        .procedure(
            "main",
            vec![
                read(1, "i"),
                read(2, "j"),
                read(3, "x"),
                assign(4, "sum", Expr::Const(0)),
                assign(5, "count", Expr::Const(0)),
                print(6, "i"),
                while_loop(
                    7,
                    "i",
                    vec![
                        assign(8, "sum", add(var("sum"), var("i"))),
                        assign(9, "count", add(var("count"), Expr::Const(1))),
                        print(10, "sum"),
                        if_else(
                            11,
                            "x",
                            vec![assign(12, "x", add(var("x"), var("i")))],
                            vec![read(13, "x")],
                        ),
                        assign(14, "i", add(var("i"), var("x"))),
                    ],
                ),
                print(15, "count"),
                assign(16, "j", add(var("j"), var("count"))),
                read(17, "y"),
                print(18, "y"),
                while_loop(
                    19,
                    "j",
                    vec![
                        assign(20, "j", add(var("j"), var("y"))),
                        print(21, "j"),
                    ],
                ),
                print(22, "sum"),
            ],
        )
        .build()
}

/// ```text
/// procedure main {           procedure p {
/// 1  x = 1;                  8  x = x * 2; }
/// 2  y = x;
/// 3  while (x > 0) {
/// 4    x = x + 1;
/// 5    call p;
/// 6    z = x; }
/// 7  print y; }
/// ```
pub fn fixture_with_call() -> Program {
    ProgramBuilder::new()
        .procedure(
            "main",
            vec![
                assign(1, "x", Expr::Const(1)),
                assign(2, "y", var("x")),
                while_loop(
                    3,
                    "x",
                    vec![
                        assign(4, "x", add(var("x"), Expr::Const(1))),
                        call(5, "p"),
                        assign(6, "z", var("x")),
                    ],
                ),
                print(7, "y"),
            ],
        )
        .procedure("p", vec![assign(8, "x", mul(var("x"), Expr::Const(2)))])
        .build()
}
