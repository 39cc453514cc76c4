pub(crate) mod attribute;
pub(crate) mod call;
pub(crate) mod declaration;
pub(crate) mod node;
