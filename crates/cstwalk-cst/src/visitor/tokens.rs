// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Fixed text emitted by the source printer at each phase of a node.

use super::stack::TraversalStack;
use crate::nodes::{NodeKind, SyntaxNode};

/// Text for the four phases of one node.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(super) struct Tokens {
    pub open: &'static str,
    pub second: &'static str,
    pub sub: &'static str,
    pub close: &'static str,
}

impl Tokens {
    const NONE: Tokens = Tokens {
        open: "",
        second: "",
        sub: "",
        close: "",
    };

    const fn open(open: &'static str) -> Self {
        Tokens { open, ..Self::NONE }
    }

    const fn wrap(open: &'static str, close: &'static str) -> Self {
        Tokens {
            open,
            close,
            ..Self::NONE
        }
    }

    const fn list(open: &'static str, sub: &'static str, close: &'static str) -> Self {
        Tokens {
            open,
            sub,
            close,
            ..Self::NONE
        }
    }

    const fn with_second(self, second: &'static str) -> Self {
        Tokens { second, ..self }
    }

    const fn with_sub(self, sub: &'static str) -> Self {
        Tokens { sub, ..self }
    }

    const fn with_close(self, close: &'static str) -> Self {
        Tokens { close, ..self }
    }
}

/// Operator text for kinds printed between their operands.
fn operator(kind: NodeKind) -> Option<&'static str> {
    use NodeKind::*;

    Some(match kind {
        Plus => " + ",
        Minus => " - ",
        Star => " * ",
        Div => " / ",
        Mod => " % ",
        StarStar => " ** ",
        Assign => " = ",
        PlusAssign => " += ",
        MinusAssign => " -= ",
        StarAssign => " *= ",
        DivAssign => " /= ",
        ModAssign => " %= ",
        StarStarAssign => " **= ",
        BandAssign => " &= ",
        BorAssign => " |= ",
        BxorAssign => " ^= ",
        SlAssign => " <<= ",
        SrAssign => " >>= ",
        BsrAssign => " >>>= ",
        Equal => " == ",
        NotEqual => " != ",
        Lt => " < ",
        Gt => " > ",
        Le => " <= ",
        Ge => " >= ",
        CompareTo => " <=> ",
        Land => " && ",
        Lor => " || ",
        Band => " & ",
        Bor => " | ",
        Bxor => " ^ ",
        Sl => " << ",
        Sr => " >> ",
        Bsr => " >>> ",
        RegexFind => " =~ ",
        RegexMatch => " ==~ ",
        ElvisOperator => " ?: ",
        LiteralIn | ForInIterable => " in ",
        LiteralAs => " as ",
        ForEachClause => " : ",
        LabeledArg | LabeledStat => ": ",
        Dot => ".",
        OptionalDot => "?.",
        SpreadDot => "*.",
        MemberPointer => ".&",
        RangeInclusive => "..",
        RangeExclusive => "..<",
        _ => return None,
    })
}

/// Keyword text for `LITERAL_*` and bare modifier kinds, e.g. `LITERAL_int` to `int`.
pub(super) fn keyword(kind: NodeKind) -> Option<&'static str> {
    match kind {
        NodeKind::Abstract => Some("abstract"),
        NodeKind::Final => Some("final"),
        NodeKind::Strictfp => Some("strictfp"),
        _ => kind.name().strip_prefix("LITERAL_"),
    }
}

fn parent_is(stack: &TraversalStack<'_>, kinds: &[NodeKind]) -> bool {
    stack.parent_kind().is_some_and(|k| kinds.contains(&k))
}

/// True when the nearest ancestor that is not an array declarator is a type.
fn in_type_context(stack: &TraversalStack<'_>) -> bool {
    stack
        .ancestors()
        .map(SyntaxNode::kind)
        .find(|&k| k != NodeKind::ArrayDeclarator)
        .is_some_and(|k| matches!(k, NodeKind::Type | NodeKind::Typecast))
}

/// The fixed tokens for `node`, given where it sits.
pub(super) fn tokens_for(node: &SyntaxNode, stack: &TraversalStack<'_>) -> Tokens {
    use NodeKind::*;

    let kind = node.kind();
    let arity = node.children().len();

    if let Some(op) = operator(kind) {
        // A childless STAR is an import wildcard.
        if kind == Star && arity == 0 {
            return Tokens::open("*");
        }
        return Tokens::open(op);
    }

    match kind {
        Question => Tokens::open(" ? ").with_second(" : "),
        IndexOp => Tokens::wrap("[", "]"),
        LiteralInstanceof => Tokens::open(" instanceof "),
        UnaryMinus => Tokens::open("-"),
        UnaryPlus => Tokens::open("+"),
        Lnot => Tokens::open("!"),
        Bnot => Tokens::open("~"),
        Inc | PostInc => Tokens::open("++"),
        Dec | PostDec => Tokens::open("--"),
        SpreadArg => Tokens::open("*"),
        SpreadMapArg => Tokens::open("*:"),
        SelectSlot => Tokens::open("@"),
        EmptyStat => Tokens::open(";"),

        MethodCall => match arity {
            2 if node.children()[1].kind() == ClosableBlock => Tokens::NONE,
            _ => Tokens::wrap("(", ")"),
        },
        Elist if parent_is(stack, &[EnumConstantDef, CtorCall, SuperCtorCall]) => {
            Tokens::list("(", ", ", ")")
        }
        Elist => Tokens::list("", ", ", ""),
        CtorCall => Tokens::open("this"),
        SuperCtorCall => Tokens::open("super"),
        ListConstructor | AnnotationArrayInit => Tokens::list("[", ", ", "]"),
        MapConstructor if arity == 0 => Tokens::open("[:]"),
        MapConstructor => Tokens::list("[", ", ", "]"),

        LiteralNew => {
            let call = node.child_at(1).is_some_and(|c| c.kind() == Elist);
            match (call, arity) {
                (true, n) if n >= 3 => Tokens::list("new ", ")", "").with_second("("),
                (true, _) => Tokens::wrap("new ", ")").with_second("("),
                (false, _) => Tokens::open("new "),
            }
        }
        Annotation if arity > 1 => Tokens::list("@", ", ", ") ").with_second("("),
        Annotation => Tokens::wrap("@", " "),
        AnnotationMemberValuePair => Tokens::wrap("", " = "),

        ArrayDeclarator if in_type_context(stack) => Tokens::open("[]"),
        ArrayDeclarator => Tokens::wrap("[", "]"),
        Type if arity == 0 && parent_is(stack, &[VariableDef, MethodDef]) => {
            let has_modifiers = stack
                .parent()
                .and_then(|p| p.child_of_kind(Modifiers))
                .is_some_and(SyntaxNode::has_children);
            if has_modifiers {
                Tokens::NONE
            } else {
                Tokens::open("def ")
            }
        }
        Type if arity > 0 && parent_is(stack, &[VariableDef, MethodDef, ParameterDef]) => {
            Tokens::wrap("", " ")
        }
        Typecast => Tokens::wrap("(", ") "),
        VariableParameterDef => Tokens::NONE.with_sub("... "),
        Parameters if parent_is(stack, &[ClosableBlock]) => Tokens::list("", ", ", ""),
        Parameters => Tokens::list("(", ", ", ")"),

        TypeArguments | TypeParameters => Tokens::list("<", ", ", ">"),
        WildcardType => Tokens::open("?"),
        TypeUpperBounds => Tokens::list(" extends ", " & ", ""),
        TypeLowerBounds => Tokens::open(" super "),
        ExtendsClause if arity > 0 => Tokens::list(" extends ", ", ", ""),
        ImplementsClause if arity > 0 => Tokens::list(" implements ", ", ", ""),
        LiteralThrows => Tokens::list(" throws ", ", ", ""),

        ClassDef => Tokens::open("class "),
        InterfaceDef => Tokens::open("interface "),
        EnumDef => Tokens::open("enum "),
        TraitDef => Tokens::open("trait "),
        AnnotationDef => Tokens::open("@interface "),
        PackageDef => Tokens::open("package "),
        Import => Tokens::open("import "),
        StaticImport => Tokens::open("import static "),
        StaticInit => Tokens::open("static "),

        LiteralReturn if arity > 0 => Tokens::open("return "),
        LiteralThrow => Tokens::open("throw "),
        LiteralBreak if arity > 0 => Tokens::open("break "),
        LiteralContinue if arity > 0 => Tokens::open("continue "),
        LiteralAssert if arity > 1 => Tokens::open("assert ").with_second(" : "),
        LiteralAssert => Tokens::open("assert "),

        LiteralIf => Tokens::wrap("if (", ") ").with_sub(" else "),
        LiteralWhile => Tokens::wrap("while (", ") "),
        LiteralFor if node.child_at(0).is_some_and(|c| c.kind() == ForInit) => {
            Tokens::wrap("for (", ") ").with_second("; ").with_sub("; ")
        }
        LiteralFor => Tokens::wrap("for (", ") "),
        LiteralSynchronized if arity > 0 && !parent_is(stack, &[Modifiers]) => {
            Tokens::wrap("synchronized (", ") ")
        }
        LiteralTry => Tokens::open("try "),
        LiteralCatch => Tokens::wrap(" catch (", ") "),
        LiteralFinally => Tokens::open(" finally "),
        MultiCatch if arity > 1 => Tokens::NONE.with_second(" "),
        MultiCatchTypes => Tokens::list("", " | ", ""),
        LiteralCase => Tokens::wrap("case ", ":"),
        LiteralDefault if parent_is(stack, &[CaseGroup]) => Tokens::open("default:"),

        _ => match keyword(kind) {
            Some(_) if parent_is(stack, &[Modifiers]) => Tokens::NONE.with_close(" "),
            _ => Tokens::NONE,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_strip_prefix() {
        assert_eq!(keyword(NodeKind::LiteralInt), Some("int"));
        assert_eq!(keyword(NodeKind::LiteralInstanceof), Some("instanceof"));
        assert_eq!(keyword(NodeKind::Final), Some("final"));
        assert_eq!(keyword(NodeKind::Ident), None);
    }

    #[test]
    fn star_depends_on_arity() {
        let stack = TraversalStack::new();
        let wildcard = SyntaxNode::new(NodeKind::Star);
        assert_eq!(tokens_for(&wildcard, &stack).open, "*");
        let product = SyntaxNode::new(NodeKind::Star)
            .child(SyntaxNode::leaf(NodeKind::NumInt, "2"))
            .child(SyntaxNode::leaf(NodeKind::NumInt, "3"));
        assert_eq!(tokens_for(&product, &stack).open, " * ");
    }

    #[test]
    fn empty_type_prints_def_without_modifiers() {
        let decl = SyntaxNode::new(NodeKind::VariableDef)
            .child(SyntaxNode::new(NodeKind::Modifiers))
            .child(SyntaxNode::new(NodeKind::Type))
            .child(SyntaxNode::leaf(NodeKind::Ident, "x"));
        let ty = &decl.children()[1];
        let mut stack = TraversalStack::new();
        stack.push(&decl);
        stack.push(ty);
        assert_eq!(tokens_for(ty, &stack).open, "def ");
    }
}
