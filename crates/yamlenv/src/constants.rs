//! Centralized constants for the yamlenv workspace.
//!
//! This module contains default values shared by the library and the CLI to
//! avoid string duplication.

// =============================================================================
// File Defaults
// =============================================================================

/// File name loaded when the caller does not provide one.
pub const DEFAULT_FILENAME: &str = "env.yml";

// =============================================================================
// Flattening
// =============================================================================

/// Separator placed between a parent key and its child when flattening.
pub const KEY_SEPARATOR: &str = "_";

// =============================================================================
// Validation
// =============================================================================

/// Prefix of every aggregated validation message.
pub const VALIDATION_MESSAGE_PREFIX: &str = "One or more environment variables failed assertions";
