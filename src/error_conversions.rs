//! Error conversion glue between layers.
//!
//! The domain layer must not depend on service/repository error types, so the
//! `From` impls tying them together live here.

use crate::domain::types::TypeConstraintError;
use crate::repository::RepositoryError;

impl From<TypeConstraintError> for RepositoryError {
    fn from(val: TypeConstraintError) -> Self {
        RepositoryError::ValidationError(val.to_string())
    }
}

#[cfg(feature = "server")]
mod server {
    use crate::domain::types::TypeConstraintError;
    use crate::forms::resources::ResourceFormError;
    use crate::forms::vendors::VendorFormError;
    use crate::services::ServiceError;

    impl From<TypeConstraintError> for ServiceError {
        fn from(val: TypeConstraintError) -> Self {
            ServiceError::TypeConstraint(val.to_string())
        }
    }

    impl From<VendorFormError> for ServiceError {
        fn from(val: VendorFormError) -> Self {
            ServiceError::Form(val.to_string())
        }
    }

    impl From<ResourceFormError> for ServiceError {
        fn from(val: ResourceFormError) -> Self {
            ServiceError::Form(val.to_string())
        }
    }
}
