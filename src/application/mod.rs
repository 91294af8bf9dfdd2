// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// This layer owns the review workflow:
//
//   session.rs         — the annotation state machine
//   exporter.rs        — dataset + judgments → export table
//   review_use_case.rs — the interactive form driving both
//
// Rules for this layer:
//   - No spreadsheet library calls (that's Layer 4 and 6)
//   - No argument parsing (that's Layer 1)
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// Cursor, judgments, notes and their transitions
pub mod session;

// Builds the annotated output table
pub mod exporter;

// The interactive review loop
pub mod review_use_case;
