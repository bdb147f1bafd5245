//! Registration and login for Planner.
//!
//! Passwords are stored only as salted argon2 hashes; successful logins
//! are answered with a signed JWT carrying a 7-day expiry. There is no
//! refresh or revocation mechanism.
//!
//! # Example
//!
//! ```no_run
//! use planner_auth::{TokenSigner, UserRegistry};
//! use planner_persistence::UserStore;
//!
//! let registry = UserRegistry::load(UserStore::new("/tmp/planner")).unwrap();
//! let signer = TokenSigner::new("secret");
//!
//! registry.register("Ada", "ada@example.com", "s3cret", None).unwrap();
//! let user = registry.login("ada@example.com", "s3cret").unwrap();
//! let token = signer.issue(&user).unwrap();
//! ```

pub mod error;
pub mod password;
pub mod registry;
pub mod token;

pub use error::{AuthError, Result};
pub use password::{hash_password, verify_password};
pub use registry::UserRegistry;
pub use token::{Claims, TokenSigner, TOKEN_TTL_DAYS};
