// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust types that name the concepts of the review form:
// judgments, cells, row shapes, and the errors an action can
// produce.
//
// Rules for this layer:
//   - NO spreadsheet library types allowed here
//   - NO file I/O
//   - Only plain Rust structs, enums, and traits
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

// Correct / Wrong / Unsure
pub mod judgment;

// Cell values, row shapes, and the per-row view shown to the user
pub mod row;

// LoadError and SessionError
pub mod error;

// Abstractions the data and infra layers implement
pub mod traits;
