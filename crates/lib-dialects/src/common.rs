//! Keyword lists shared by every dialect (spec §4.1 "Standard SQL" row is
//! the common baseline every other dialect builds on top of).

use sqlfmt_lib_core::{BlockPair, DialectConfigBuilder, NumericFlags, QuoteStyle, ReservedClass};

pub const TOP_LEVEL: &[&str] = &[
    "select",
    "from",
    "where",
    "group by",
    "having",
    "order by",
    "limit",
    "offset",
    "with",
    "set",
    "values",
    "insert into",
    "update",
    "delete from",
    "union",
    "union all",
    "intersect",
    "except",
];

pub const TOP_LEVEL_NO_INDENT: &[&str] = &["union", "union all", "intersect", "except"];

pub const NEWLINE: &[&str] = &[
    "and",
    "or",
    "xor",
    "when",
    "else",
    "elsif",
    "join",
    "inner join",
    "left join",
    "left outer join",
    "right join",
    "right outer join",
    "full join",
    "full outer join",
    "cross join",
];

pub const RESERVED: &[&str] = &[
    "as",
    "on",
    "using",
    "in",
    "is",
    "not",
    "null",
    "like",
    "between",
    "distinct",
    "all",
    "any",
    "exists",
    "asc",
    "desc",
    "into",
    "default",
    "primary key",
    "foreign key",
    "references",
    "unique",
    "check",
    "constraint",
    "cascade",
    "over",
    "partition by",
    "then",
    "int",
    "integer",
    "bigint",
    "smallint",
    "varchar",
    "char",
    "text",
    "boolean",
    "date",
    "timestamp",
    "numeric",
    "decimal",
    "float",
    "double",
];

/// Apply the baseline Standard SQL reserved-word set to a builder in
/// progress. Every dialect starts here and layers its own differences on
/// top (spec §4.1 "Cross-dialect differences").
pub fn apply_standard_reserved(builder: DialectConfigBuilder) -> DialectConfigBuilder {
    builder
        .reserved(ReservedClass::TopLevel, TOP_LEVEL)
        .reserved(ReservedClass::TopLevelNoIndent, TOP_LEVEL_NO_INDENT)
        .reserved(ReservedClass::Newline, NEWLINE)
        .reserved(ReservedClass::Reserved, RESERVED)
}

pub fn ansi_numeric() -> NumericFlags {
    NumericFlags::default()
}

pub fn double_quote_identifier() -> QuoteStyle {
    QuoteStyle::new('"', '"')
}

pub fn single_quote_string() -> QuoteStyle {
    QuoteStyle::new('\'', '\'')
}

pub fn backtick_identifier() -> QuoteStyle {
    QuoteStyle::new('`', '`')
}

pub fn bracket_identifier() -> QuoteStyle {
    QuoteStyle::new('[', ']')
}

/// CASE is a declarative expression, not a procedural scope: it closes with
/// either the bare `END` ANSI form or the PL/SQL statement form `END CASE`
/// (spec §3 Token kinds, §4.6.2 `close-paren`). Both are registered so the
/// tokenizer recognizes either spelling; which one actually applies to a
/// given `END` is resolved at format time from the `BlockContext` stack
/// (spec §9), not from which phrase matched.
pub fn case_only_block_pair() -> Vec<BlockPair> {
    vec![
        BlockPair {
            open: "CASE".into(),
            close: "END".into(),
            procedural: false,
        },
        BlockPair {
            open: "CASE".into(),
            close: "END CASE".into(),
            procedural: false,
        },
    ]
}

/// Procedural block keywords shared by every dialect that has a procedural
/// language at all (PL/SQL, and the generic BEGIN...END many dialects
/// accept in stored routines), plus [`case_only_block_pair`].
pub fn procedural_block_pairs() -> Vec<BlockPair> {
    let mut pairs = vec![
        BlockPair {
            open: "BEGIN".into(),
            close: "END".into(),
            procedural: true,
        },
        BlockPair {
            open: "IF".into(),
            close: "END IF".into(),
            procedural: true,
        },
        BlockPair {
            open: "LOOP".into(),
            close: "END LOOP".into(),
            procedural: true,
        },
        BlockPair {
            open: "WHILE".into(),
            close: "END WHILE".into(),
            procedural: true,
        },
        BlockPair {
            open: "REPEAT".into(),
            close: "END REPEAT".into(),
            procedural: true,
        },
    ];
    pairs.extend(case_only_block_pair());
    pairs
}
