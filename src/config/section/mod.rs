//! Configuration section definitions.
//!
//! Each module corresponds to a part of `assethash.toml`:
//!
//! | Module    | TOML             | Purpose                              |
//! |-----------|------------------|--------------------------------------|
//! | `inputs`  | `inputs = [..]`  | Directories or glob patterns         |
//! | `resolve` | `[resolve]`      | Resolution mode, dot files           |
//! | `keys`    | `[keys]`         | Key strategy and prefix              |

mod inputs;
mod keys;
mod resolve;

pub use inputs::InputSpec;
pub use keys::KeysSection;
pub use resolve::ResolveSection;
