//! One-shot scaffolding tool for pnpm/TypeScript projects.
//!
//! Run in a directory that already holds a `package.json` (from `pnpm init`),
//! the tool rewrites the manifest into a canonical shape, creates `src/` and
//! `dist/`, writes the Prettier/TypeScript/Vitest/gitignore config files, and
//! installs the standard dev dependencies. Strictly sequential, fail-fast,
//! no rollback.
//!
//! The crate is organised into small layers:
//!
//! - **[`manifest`]** — load, transform, and rewrite `package.json`
//! - **[`templates`]** — fixed file content and default values (pure data)
//! - **[`scaffold`]** — the five-step pipeline
//! - **[`exec`]** — mockable external-command seam for the pnpm invocation
#![deny(clippy::or_fun_call)]
#![deny(clippy::bool_to_int_with_if)]

pub mod cli;
pub mod error;
pub mod exec;
pub mod logging;
pub mod manifest;
pub mod scaffold;
pub mod templates;
