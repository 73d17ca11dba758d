pub mod v1;

pub mod prelude {
    pub use crate::v1::config::*;
    pub use crate::v1::error::*;
    pub use crate::v1::macie2::{
        account::*, bucket::*, common::*, filter::*, finding::*, identifier::*, identity::*,
        job::*, operations::*, session::*, tag::*, usage::*,
    };
    pub use crate::v1::operation::*;
    pub use crate::v1::wire::{insert_unique, WireEnum};
}
