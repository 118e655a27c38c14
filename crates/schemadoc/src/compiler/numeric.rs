use super::helpers::{check_order, get_bool, get_number, Object};
use crate::{node::NodeId, Document, SchemaError};

/// `multipleOf`, `minimum`, `maximum` and their exclusive flags.
pub(super) fn compile(
    document: &mut Document,
    target: NodeId,
    object: &Object,
) -> Result<(), SchemaError> {
    let multiple_of = get_number(object, "multipleOf")?;
    if multiple_of.is_some_and(|value| value <= 0.) {
        return Err(SchemaError::NonPositiveMultipleOf);
    }

    let minimum = get_number(object, "minimum")?;
    let exclusive_minimum = exclusive(object, "exclusiveMinimum", "minimum", minimum)?;
    let maximum = get_number(object, "maximum")?;
    let exclusive_maximum = exclusive(object, "exclusiveMaximum", "maximum", maximum)?;
    check_order(minimum, maximum, "minimum", "maximum")?;

    let node = document.node_mut(target);
    node.multiple_of = multiple_of;
    node.minimum = minimum;
    node.exclusive_minimum = exclusive_minimum;
    node.maximum = maximum;
    node.exclusive_maximum = exclusive_maximum;
    Ok(())
}

fn exclusive(
    object: &Object,
    keyword: &'static str,
    bound_keyword: &'static str,
    bound: Option<f64>,
) -> Result<bool, SchemaError> {
    match get_bool(object, keyword)? {
        Some(_) if bound.is_none() => Err(SchemaError::ExclusiveWithoutBound {
            exclusive: keyword,
            bound: bound_keyword,
        }),
        value => Ok(value.unwrap_or_default()),
    }
}
