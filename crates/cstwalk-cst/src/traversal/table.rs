// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Assignment of a [`Shape`] to every node.
//!
//! Most kinds have a fixed shape. A few are refined by the node's context:
//! its arity, its structural parent, or the kind of its first or last child.

use super::shape::Shape;
use super::tree::{NodeId, TreeIndex};
use crate::nodes::NodeKind;

/// The base shape of a kind, ignoring context.
pub fn base_shape(kind: NodeKind) -> Shape {
    use NodeKind::*;

    match kind {
        // Binary and assignment operators, member access, labels.
        Assign | Band | BandAssign | Bor | BorAssign | Bsr | BsrAssign | Bxor | BxorAssign
        | CompareTo | Div | DivAssign | Dot | ElvisOperator | Equal | ForEachClause
        | ForInIterable | Ge | Gt | LabeledArg | LabeledStat | Land | Le | LiteralAs
        | LiteralIn | Lor | Lt | MemberPointer | Minus | MinusAssign | Mod | ModAssign
        | NotEqual | OptionalDot | Plus | PlusAssign | RangeExclusive | RangeInclusive
        | RegexFind | RegexMatch | Sl | SlAssign | SpreadDot | Sr | SrAssign | Star
        | StarAssign | StarStar | StarStarAssign => Shape::Infix,

        Question => Shape::Ternary,
        LiteralInstanceof => Shape::TypeTest,
        IndexOp => Shape::Subscript,
        VariableParameterDef => Shape::VarArgs,
        MethodCall => Shape::Wrap,
        PostInc | PostDec => Shape::Postfix,

        LiteralWhile | Typecast => Shape::Guarded,
        LiteralIf => Shape::Branches,
        LiteralSwitch | MultiCatch => Shape::HeadThenRest,
        LiteralTry | LiteralCatch | LiteralFor | LiteralSynchronized
        | AnnotationMemberValuePair => Shape::HeadThenOutside,
        CaseGroup => Shape::CaseGroup,

        Annotation | LiteralNew | ClosableBlock | LiteralAssert => Shape::HeadDelimited,

        Slist | Objblock | Elist | Parameters | ListConstructor | MapConstructor
        | ClosureList | TypeArguments | TypeParameters | TypeUpperBounds | TypeLowerBounds
        | StringConstructor | AnnotationArrayInit | ExtendsClause | ImplementsClause
        | LiteralThrows | MultiCatchTypes => Shape::Delimited,

        Modifiers | Annotations | VariableDef | ParameterDef | MethodDef | AnnotationFieldDef
        | EnumConstantDef | Type | TypeParameter | WildcardType | ForInit | ForCondition
        | ForIterator | ImplicitParameters | Import | StaticImport | PackageDef | Block
        | ArrayDeclarator => Shape::EncloseAll,

        ClassDef | InterfaceDef | EnumDef | AnnotationDef | TraitDef => Shape::Wrap,

        // No grammar entry: read every child in order.
        Unknown(_) => Shape::EncloseAll,

        _ => Shape::Enclose,
    }
}

/// The shape the source-order walk uses for `id`.
pub fn shape_for(tree: &TreeIndex<'_>, id: NodeId) -> Shape {
    let node = tree.node(id);
    let kind = node.kind();
    let arity = tree.children(id).len();
    let parent_kind = tree.parent(id).map(|p| tree.node(p).kind());
    let first_kind = tree.child(id, 0).map(|c| tree.node(c).kind());

    match kind {
        // `import foo.*` puts a childless STAR under the DOT.
        NodeKind::Star if arity == 0 => Shape::Enclose,

        // `def x = 1`: the initializer hangs under ASSIGN, which has no left operand.
        NodeKind::Assign
            if matches!(
                parent_kind,
                Some(NodeKind::VariableDef | NodeKind::ParameterDef)
            ) =>
        {
            Shape::Enclose
        }

        NodeKind::MethodCall => {
            let last_is_closure = node
                .children()
                .last()
                .is_some_and(|c| c.kind() == NodeKind::ClosableBlock);
            match (arity, last_is_closure) {
                (2, true) => Shape::Infix,
                (n, true) if n >= 3 => Shape::WrapWithTrailing,
                _ => Shape::Wrap,
            }
        }

        NodeKind::ArrayDeclarator if in_type_context(tree, id) => Shape::Postfix,

        NodeKind::LiteralFor if first_kind == Some(NodeKind::ForInit) => Shape::ClassicFor,

        // As a modifier `synchronized` is a bare keyword.
        NodeKind::LiteralSynchronized
            if arity == 0 || parent_kind == Some(NodeKind::Modifiers) =>
        {
            Shape::Enclose
        }

        _ => base_shape(kind),
    }
}

/// True when the nearest ancestor that is not itself an array declarator is a
/// type, so the declarator follows its element type: `String[]`.
fn in_type_context(tree: &TreeIndex<'_>, id: NodeId) -> bool {
    let mut up = tree.parent(id);
    while let Some(p) = up {
        match tree.node(p).kind() {
            NodeKind::ArrayDeclarator => up = tree.parent(p),
            NodeKind::Type | NodeKind::Typecast => return true,
            _ => return false,
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nodes::SyntaxNode;

    fn shape_of_root(root: SyntaxNode) -> Shape {
        let roots = [root];
        let tree = TreeIndex::build(&roots);
        shape_for(&tree, NodeId(0))
    }

    fn ident(text: &str) -> SyntaxNode {
        SyntaxNode::leaf(NodeKind::Ident, text)
    }

    #[test]
    fn unknown_and_leaf_kinds() {
        assert_eq!(base_shape(NodeKind::Unknown(9000)), Shape::EncloseAll);
        assert_eq!(base_shape(NodeKind::NumInt), Shape::Enclose);
        assert_eq!(base_shape(NodeKind::Plus), Shape::Infix);
        assert_eq!(base_shape(NodeKind::MultiCatch), Shape::HeadThenRest);
    }

    #[test]
    fn method_call_variants() {
        let plain = SyntaxNode::new(NodeKind::MethodCall)
            .child(ident("foo"))
            .child(SyntaxNode::new(NodeKind::Elist));
        assert_eq!(shape_of_root(plain), Shape::Wrap);

        let bare_closure = SyntaxNode::new(NodeKind::MethodCall)
            .child(ident("each"))
            .child(SyntaxNode::new(NodeKind::ClosableBlock));
        assert_eq!(shape_of_root(bare_closure), Shape::Infix);

        let trailing = SyntaxNode::new(NodeKind::MethodCall)
            .child(ident("with"))
            .child(SyntaxNode::new(NodeKind::Elist))
            .child(SyntaxNode::new(NodeKind::ClosableBlock));
        assert_eq!(shape_of_root(trailing), Shape::WrapWithTrailing);
    }

    #[test]
    fn array_declarator_depends_on_ancestor() {
        let roots = [SyntaxNode::new(NodeKind::Type).child(
            SyntaxNode::new(NodeKind::ArrayDeclarator)
                .child(SyntaxNode::new(NodeKind::ArrayDeclarator).child(ident("int"))),
        )];
        let tree = TreeIndex::build(&roots);
        assert_eq!(shape_for(&tree, NodeId(1)), Shape::Postfix);
        assert_eq!(shape_for(&tree, NodeId(2)), Shape::Postfix);

        let roots = [SyntaxNode::new(NodeKind::LiteralNew)
            .child(ident("int"))
            .child(SyntaxNode::new(NodeKind::ArrayDeclarator))];
        let tree = TreeIndex::build(&roots);
        assert_eq!(shape_for(&tree, NodeId(2)), Shape::EncloseAll);
    }

    #[test]
    fn declaration_initializer_is_not_infix() {
        let roots = [SyntaxNode::new(NodeKind::VariableDef)
            .child(SyntaxNode::new(NodeKind::Modifiers))
            .child(SyntaxNode::new(NodeKind::Type))
            .child(ident("x"))
            .child(SyntaxNode::new(NodeKind::Assign).child(SyntaxNode::leaf(NodeKind::NumInt, "1")))];
        let tree = TreeIndex::build(&roots);
        assert_eq!(shape_for(&tree, NodeId(4)), Shape::Enclose);
    }

    #[test]
    fn for_and_synchronized_refinements() {
        let classic = SyntaxNode::new(NodeKind::LiteralFor)
            .child(SyntaxNode::new(NodeKind::ForInit))
            .child(SyntaxNode::new(NodeKind::ForCondition))
            .child(SyntaxNode::new(NodeKind::ForIterator))
            .child(SyntaxNode::new(NodeKind::Slist));
        assert_eq!(shape_of_root(classic), Shape::ClassicFor);

        let each = SyntaxNode::new(NodeKind::LiteralFor)
            .child(SyntaxNode::new(NodeKind::ForInIterable))
            .child(SyntaxNode::new(NodeKind::Slist));
        assert_eq!(shape_of_root(each), Shape::HeadThenOutside);

        assert_eq!(
            shape_of_root(SyntaxNode::new(NodeKind::LiteralSynchronized)),
            Shape::Enclose
        );
        let roots = [SyntaxNode::new(NodeKind::Modifiers)
            .child(SyntaxNode::new(NodeKind::LiteralSynchronized).child(ident("odd")))];
        let tree = TreeIndex::build(&roots);
        assert_eq!(shape_for(&tree, NodeId(1)), Shape::Enclose);
    }

    #[test]
    fn import_wildcard_star() {
        assert_eq!(shape_of_root(SyntaxNode::new(NodeKind::Star)), Shape::Enclose);
        let product = SyntaxNode::new(NodeKind::Star).child(ident("a")).child(ident("b"));
        assert_eq!(shape_of_root(product), Shape::Infix);
    }
}
