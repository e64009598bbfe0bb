use std::ops::Deref;

use disapprove_database_interface::{DatabaseError, Result};
use disapprove_models::DisapprovalMode;
use sqlx::{
    postgres::{PgTypeInfo, PgValueRef},
    Decode, Postgres, Type,
};

/// Identifiers are stored as BIGINT, ids above `i64::MAX` are rejected.
pub(crate) fn id_to_db(id: u64) -> Result<i64> {
    i64::try_from(id).map_err(|e| DatabaseError::ImplementationError { source: e.into() })
}

pub(crate) fn id_from_db(id: i64) -> core::result::Result<u64, sqlx::Error> {
    u64::try_from(id).map_err(|e| sqlx::Error::Decode(e.into()))
}

pub struct DisapprovalModeDecode(DisapprovalMode);
impl<'r> Decode<'r, Postgres> for DisapprovalModeDecode {
    fn decode(value: PgValueRef) -> core::result::Result<Self, sqlx::error::BoxDynError> {
        let str_value = <&str as Decode<Postgres>>::decode(value)?;
        DisapprovalMode::try_from(str_value)
            .map(Self)
            .map_err(Into::into)
    }
}

impl Type<Postgres> for DisapprovalModeDecode {
    fn type_info() -> PgTypeInfo {
        PgTypeInfo::with_name("varchar")
    }
}

impl Deref for DisapprovalModeDecode {
    type Target = DisapprovalMode;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
