use crate::to_property_value;

use gql_core::{driver::GqlQuery, Result};
use gql_query::Compiled;

/// Build the transport request for a compiled query.
pub fn bind_params(compiled: &Compiled) -> Result<GqlQuery> {
    let mut query = GqlQuery::new(compiled.text.clone());

    for param in &compiled.params {
        query
            .named_args
            .push((param.name.clone(), to_property_value(&param.value)?));
    }

    Ok(query)
}
