// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! The closed set of node kinds.
//!
//! Every kind is declared exactly once, in [`for_each_node_kind!`]. The macro
//! hands the full list to a callback macro, which is how the [`NodeKind`] enum,
//! the per-kind visitor methods, the dispatch match and the composite fan-out
//! are all generated from the same table. Adding a kind here makes the compiler
//! point at every place that has to learn about it.
//!
//! Tags are stable numeric identifiers used by serialized trees. Tags 0-3 are
//! reserved; a tag with no entry in the table becomes [`NodeKind::Unknown`].

use std::fmt;

use serde::de::{self, Deserializer, Visitor as SerdeVisitor};
use serde::{Deserialize, Serialize, Serializer};

/// Invoke `$callback!` with the full node kind table.
///
/// Each entry has the form `Variant = tag => "GRAMMAR_NAME"`.
macro_rules! for_each_node_kind {
    ($callback:ident) => {
        $callback! {
            Abstract = 4 => "ABSTRACT",
            Annotation = 5 => "ANNOTATION",
            Annotations = 6 => "ANNOTATIONS",
            AnnotationArrayInit = 7 => "ANNOTATION_ARRAY_INIT",
            AnnotationDef = 8 => "ANNOTATION_DEF",
            AnnotationFieldDef = 9 => "ANNOTATION_FIELD_DEF",
            AnnotationMemberValuePair = 10 => "ANNOTATION_MEMBER_VALUE_PAIR",
            ArrayDeclarator = 11 => "ARRAY_DECLARATOR",
            Assign = 12 => "ASSIGN",
            At = 13 => "AT",
            Band = 14 => "BAND",
            BandAssign = 15 => "BAND_ASSIGN",
            BigSuffix = 16 => "BIG_SUFFIX",
            Block = 17 => "BLOCK",
            Bnot = 18 => "BNOT",
            Bor = 19 => "BOR",
            BorAssign = 20 => "BOR_ASSIGN",
            Bsr = 21 => "BSR",
            BsrAssign = 22 => "BSR_ASSIGN",
            Bxor = 23 => "BXOR",
            BxorAssign = 24 => "BXOR_ASSIGN",
            CaseGroup = 25 => "CASE_GROUP",
            ClassDef = 26 => "CLASS_DEF",
            ClosableBlock = 27 => "CLOSABLE_BLOCK",
            ClosableBlockOp = 28 => "CLOSABLE_BLOCK_OP",
            ClosedBlock = 29 => "CLOSED_BLOCK",
            ClosureList = 30 => "CLOSURE_LIST",
            Colon = 31 => "COLON",
            Comma = 32 => "COMMA",
            CompareTo = 33 => "COMPARE_TO",
            CtorCall = 34 => "CTOR_CALL",
            CtorIdent = 35 => "CTOR_IDENT",
            Dec = 36 => "DEC",
            Digit = 37 => "DIGIT",
            Div = 38 => "DIV",
            DivAssign = 39 => "DIV_ASSIGN",
            Dollar = 40 => "DOLLAR",
            Dot = 41 => "DOT",
            DynamicMember = 42 => "DYNAMIC_MEMBER",
            Elist = 43 => "ELIST",
            ElvisOperator = 44 => "ELVIS_OPERATOR",
            EmptyStat = 45 => "EMPTY_STAT",
            EnumConstantDef = 46 => "ENUM_CONSTANT_DEF",
            EnumDef = 47 => "ENUM_DEF",
            Eof = 48 => "EOF",
            Equal = 49 => "EQUAL",
            Esc = 50 => "ESC",
            Exponent = 51 => "EXPONENT",
            Expr = 52 => "EXPR",
            ExtendsClause = 53 => "EXTENDS_CLAUSE",
            Final = 54 => "FINAL",
            FloatSuffix = 55 => "FLOAT_SUFFIX",
            ForCondition = 56 => "FOR_CONDITION",
            ForEachClause = 57 => "FOR_EACH_CLAUSE",
            ForInit = 58 => "FOR_INIT",
            ForInIterable = 59 => "FOR_IN_ITERABLE",
            ForIterator = 60 => "FOR_ITERATOR",
            Ge = 61 => "GE",
            Gt = 62 => "GT",
            HexDigit = 63 => "HEX_DIGIT",
            Ident = 64 => "IDENT",
            ImplementsClause = 65 => "IMPLEMENTS_CLAUSE",
            ImplicitParameters = 66 => "IMPLICIT_PARAMETERS",
            Import = 67 => "IMPORT",
            Inc = 68 => "INC",
            IndexOp = 69 => "INDEX_OP",
            InstanceInit = 70 => "INSTANCE_INIT",
            InterfaceDef = 71 => "INTERFACE_DEF",
            LabeledArg = 72 => "LABELED_ARG",
            LabeledStat = 73 => "LABELED_STAT",
            Land = 74 => "LAND",
            Lbrack = 75 => "LBRACK",
            Lcurly = 76 => "LCURLY",
            Le = 77 => "LE",
            Letter = 78 => "LETTER",
            ListConstructor = 79 => "LIST_CONSTRUCTOR",
            LiteralAs = 80 => "LITERAL_as",
            LiteralAssert = 81 => "LITERAL_assert",
            LiteralBoolean = 82 => "LITERAL_boolean",
            LiteralBreak = 83 => "LITERAL_break",
            LiteralByte = 84 => "LITERAL_byte",
            LiteralCase = 85 => "LITERAL_case",
            LiteralCatch = 86 => "LITERAL_catch",
            LiteralChar = 87 => "LITERAL_char",
            LiteralClass = 88 => "LITERAL_class",
            LiteralContinue = 89 => "LITERAL_continue",
            LiteralDef = 90 => "LITERAL_def",
            LiteralDefault = 91 => "LITERAL_default",
            LiteralDouble = 92 => "LITERAL_double",
            LiteralElse = 93 => "LITERAL_else",
            LiteralEnum = 94 => "LITERAL_enum",
            LiteralExtends = 95 => "LITERAL_extends",
            LiteralFalse = 96 => "LITERAL_false",
            LiteralFinally = 97 => "LITERAL_finally",
            LiteralFloat = 98 => "LITERAL_float",
            LiteralFor = 99 => "LITERAL_for",
            LiteralIf = 100 => "LITERAL_if",
            LiteralImplements = 101 => "LITERAL_implements",
            LiteralImport = 102 => "LITERAL_import",
            LiteralIn = 103 => "LITERAL_in",
            LiteralInstanceof = 104 => "LITERAL_instanceof",
            LiteralInt = 105 => "LITERAL_int",
            LiteralInterface = 106 => "LITERAL_interface",
            LiteralLong = 107 => "LITERAL_long",
            LiteralNative = 108 => "LITERAL_native",
            LiteralNew = 109 => "LITERAL_new",
            LiteralNull = 110 => "LITERAL_null",
            LiteralPackage = 111 => "LITERAL_package",
            LiteralPrivate = 112 => "LITERAL_private",
            LiteralProtected = 113 => "LITERAL_protected",
            LiteralPublic = 114 => "LITERAL_public",
            LiteralReturn = 115 => "LITERAL_return",
            LiteralShort = 116 => "LITERAL_short",
            LiteralStatic = 117 => "LITERAL_static",
            LiteralSuper = 118 => "LITERAL_super",
            LiteralSwitch = 119 => "LITERAL_switch",
            LiteralSynchronized = 120 => "LITERAL_synchronized",
            LiteralThis = 121 => "LITERAL_this",
            LiteralThreadsafe = 122 => "LITERAL_threadsafe",
            LiteralThrow = 123 => "LITERAL_throw",
            LiteralThrows = 124 => "LITERAL_throws",
            LiteralTransient = 125 => "LITERAL_transient",
            LiteralTrue = 126 => "LITERAL_true",
            LiteralTry = 127 => "LITERAL_try",
            LiteralVoid = 128 => "LITERAL_void",
            LiteralVolatile = 129 => "LITERAL_volatile",
            LiteralWhile = 130 => "LITERAL_while",
            Lnot = 131 => "LNOT",
            Lor = 132 => "LOR",
            Lparen = 133 => "LPAREN",
            Lt = 134 => "LT",
            MapConstructor = 135 => "MAP_CONSTRUCTOR",
            MemberPointer = 136 => "MEMBER_POINTER",
            MethodCall = 137 => "METHOD_CALL",
            MethodDef = 138 => "METHOD_DEF",
            Minus = 139 => "MINUS",
            MinusAssign = 140 => "MINUS_ASSIGN",
            MlComment = 141 => "ML_COMMENT",
            Mod = 142 => "MOD",
            Modifiers = 143 => "MODIFIERS",
            ModAssign = 144 => "MOD_ASSIGN",
            MultiCatch = 145 => "MULTICATCH",
            MultiCatchTypes = 146 => "MULTICATCH_TYPES",
            Nls = 147 => "NLS",
            NotEqual = 148 => "NOT_EQUAL",
            NullTreeLookahead = 149 => "NULL_TREE_LOOKAHEAD",
            NumBigDecimal = 150 => "NUM_BIG_DECIMAL",
            NumBigInt = 151 => "NUM_BIG_INT",
            NumDouble = 152 => "NUM_DOUBLE",
            NumFloat = 153 => "NUM_FLOAT",
            NumInt = 154 => "NUM_INT",
            NumLong = 155 => "NUM_LONG",
            Objblock = 156 => "OBJBLOCK",
            OneNl = 157 => "ONE_NL",
            OptionalDot = 158 => "OPTIONAL_DOT",
            PackageDef = 159 => "PACKAGE_DEF",
            ParameterDef = 160 => "PARAMETER_DEF",
            Parameters = 161 => "PARAMETERS",
            Plus = 162 => "PLUS",
            PlusAssign = 163 => "PLUS_ASSIGN",
            PostDec = 164 => "POST_DEC",
            PostInc = 165 => "POST_INC",
            Question = 166 => "QUESTION",
            RangeExclusive = 167 => "RANGE_EXCLUSIVE",
            RangeInclusive = 168 => "RANGE_INCLUSIVE",
            Rbrack = 169 => "RBRACK",
            Rcurly = 170 => "RCURLY",
            RegexpCtorEnd = 171 => "REGEXP_CTOR_END",
            RegexpLiteral = 172 => "REGEXP_LITERAL",
            RegexpSymbol = 173 => "REGEXP_SYMBOL",
            RegexFind = 174 => "REGEX_FIND",
            RegexMatch = 175 => "REGEX_MATCH",
            Rparen = 176 => "RPAREN",
            SelectSlot = 177 => "SELECT_SLOT",
            Semi = 178 => "SEMI",
            ShComment = 179 => "SH_COMMENT",
            Sl = 180 => "SL",
            Slist = 181 => "SLIST",
            SlAssign = 182 => "SL_ASSIGN",
            SlComment = 183 => "SL_COMMENT",
            SpreadArg = 184 => "SPREAD_ARG",
            SpreadDot = 185 => "SPREAD_DOT",
            SpreadMapArg = 186 => "SPREAD_MAP_ARG",
            Sr = 187 => "SR",
            SrAssign = 188 => "SR_ASSIGN",
            Star = 189 => "STAR",
            StarAssign = 190 => "STAR_ASSIGN",
            StarStar = 191 => "STAR_STAR",
            StarStarAssign = 192 => "STAR_STAR_ASSIGN",
            StaticImport = 193 => "STATIC_IMPORT",
            StaticInit = 194 => "STATIC_INIT",
            Strictfp = 195 => "STRICTFP",
            StringCh = 196 => "STRING_CH",
            StringConstructor = 197 => "STRING_CONSTRUCTOR",
            StringCtorEnd = 198 => "STRING_CTOR_END",
            StringCtorMiddle = 199 => "STRING_CTOR_MIDDLE",
            StringCtorStart = 200 => "STRING_CTOR_START",
            StringLiteral = 201 => "STRING_LITERAL",
            StringNl = 202 => "STRING_NL",
            SuperCtorCall = 203 => "SUPER_CTOR_CALL",
            TraitDef = 204 => "TRAIT_DEF",
            TripleDot = 205 => "TRIPLE_DOT",
            Type = 206 => "TYPE",
            Typecast = 207 => "TYPECAST",
            TypeArgument = 208 => "TYPE_ARGUMENT",
            TypeArguments = 209 => "TYPE_ARGUMENTS",
            TypeLowerBounds = 210 => "TYPE_LOWER_BOUNDS",
            TypeParameter = 211 => "TYPE_PARAMETER",
            TypeParameters = 212 => "TYPE_PARAMETERS",
            TypeUpperBounds = 213 => "TYPE_UPPER_BOUNDS",
            UnaryMinus = 214 => "UNARY_MINUS",
            UnaryPlus = 215 => "UNARY_PLUS",
            UnusedConst = 216 => "UNUSED_CONST",
            UnusedDo = 217 => "UNUSED_DO",
            UnusedGoto = 218 => "UNUSED_GOTO",
            VariableDef = 219 => "VARIABLE_DEF",
            VariableParameterDef = 220 => "VARIABLE_PARAMETER_DEF",
            Vocab = 221 => "VOCAB",
            WildcardType = 222 => "WILDCARD_TYPE",
            Ws = 223 => "WS",
        }
    };
}

pub(crate) use for_each_node_kind;

macro_rules! define_node_kind {
    ($( $variant:ident = $tag:literal => $name:literal ),* $(,)?) => {
        /// The grammar symbol of a [`SyntaxNode`](super::SyntaxNode).
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum NodeKind {
            $(
                #[doc = concat!("`", $name, "`")]
                $variant,
            )*
            /// A tag with no entry in the kind table.
            ///
            /// Kept so that trees produced by a newer grammar still traverse;
            /// dispatch routes these to `visit_default`.
            Unknown(u16),
        }

        impl NodeKind {
            /// Every known kind, in tag order.
            pub const ALL: &'static [NodeKind] = &[$(NodeKind::$variant),*];

            /// Stable numeric tag.
            pub fn tag(self) -> u16 {
                match self {
                    $(NodeKind::$variant => $tag,)*
                    NodeKind::Unknown(tag) => tag,
                }
            }

            /// Kind for a numeric tag. Unlisted tags map to [`NodeKind::Unknown`].
            pub fn from_tag(tag: u16) -> Self {
                match tag {
                    $($tag => NodeKind::$variant,)*
                    other => NodeKind::Unknown(other),
                }
            }

            /// Grammar name, e.g. `"METHOD_CALL"`. Unknown kinds are `"<unknown>"`.
            pub fn name(self) -> &'static str {
                match self {
                    $(NodeKind::$variant => $name,)*
                    NodeKind::Unknown(_) => "<unknown>",
                }
            }

            /// Kind for a grammar name.
            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $($name => Some(NodeKind::$variant),)*
                    _ => None,
                }
            }
        }
    };
}

for_each_node_kind!(define_node_kind);

impl NodeKind {
    /// Returns true for kinds without a table entry.
    pub fn is_unknown(self) -> bool {
        matches!(self, NodeKind::Unknown(_))
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKind::Unknown(tag) => write!(f, "<unknown #{tag}>"),
            known => f.write_str(known.name()),
        }
    }
}

// Known kinds serialize by name, unknown kinds by tag, so a tree written by a
// newer producer round-trips without losing the tag.
impl Serialize for NodeKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            NodeKind::Unknown(tag) => serializer.serialize_u16(*tag),
            known => serializer.serialize_str(known.name()),
        }
    }
}

impl<'de> Deserialize<'de> for NodeKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct KindVisitor;

        impl SerdeVisitor<'_> for KindVisitor {
            type Value = NodeKind;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a node kind name or numeric tag")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<NodeKind, E> {
                NodeKind::from_name(value)
                    .ok_or_else(|| E::custom(format!("unrecognized node kind name `{value}`")))
            }

            fn visit_u64<E: de::Error>(self, value: u64) -> Result<NodeKind, E> {
                u16::try_from(value)
                    .map(NodeKind::from_tag)
                    .map_err(|_| E::custom(format!("node kind tag {value} out of range")))
            }

            fn visit_i64<E: de::Error>(self, value: i64) -> Result<NodeKind, E> {
                u16::try_from(value)
                    .map(NodeKind::from_tag)
                    .map_err(|_| E::custom(format!("node kind tag {value} out of range")))
            }
        }

        deserializer.deserialize_any(KindVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_round_trip() {
        for kind in NodeKind::ALL {
            assert_eq!(NodeKind::from_tag(kind.tag()), *kind);
            assert_eq!(NodeKind::from_name(kind.name()), Some(*kind));
        }
    }

    #[test]
    fn table_is_large_and_unique() {
        let mut tags: Vec<u16> = NodeKind::ALL.iter().map(|k| k.tag()).collect();
        tags.sort_unstable();
        tags.dedup();
        assert_eq!(tags.len(), NodeKind::ALL.len());
        assert!(NodeKind::ALL.len() > 180);
    }

    #[test]
    fn unlisted_tag_is_unknown() {
        let kind = NodeKind::from_tag(999);
        assert_eq!(kind, NodeKind::Unknown(999));
        assert!(kind.is_unknown());
        assert_eq!(kind.tag(), 999);
        assert_eq!(kind.to_string(), "<unknown #999>");
    }

    #[test]
    fn serde_names_and_tags() {
        let json = serde_json::to_string(&NodeKind::MethodCall).unwrap();
        assert_eq!(json, "\"METHOD_CALL\"");
        let kind: NodeKind = serde_json::from_str("162").unwrap();
        assert_eq!(kind, NodeKind::Plus);
        let kind: NodeKind = serde_json::from_str("4000").unwrap();
        assert_eq!(kind, NodeKind::Unknown(4000));
        assert_eq!(serde_json::to_string(&kind).unwrap(), "4000");
        assert!(serde_json::from_str::<NodeKind>("\"NOT_A_KIND\"").is_err());
    }
}
