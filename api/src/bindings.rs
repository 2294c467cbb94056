//! TypeScript bindings generation for frontend types.
//!
//! This module exports the picker and order shapes to TypeScript using ts-rs.
//! Enable with the `ts-bindings` feature flag.

// Mirror types with TS derive when feature is enabled
#[cfg(feature = "ts-bindings")]
mod ts_types {
    use std::collections::BTreeMap;

    use ts_rs::TS;

    /// TypeScript export for the selection style
    #[derive(TS)]
    #[ts(export, export_to = "../frontend/src/generated/", rename_all = "camelCase")]
    #[allow(dead_code)]
    pub enum SelectionStyleTS {
        Manual,
        Random,
    }

    /// Per-pool values, ascending
    pub type SelectionTS = BTreeMap<String, Vec<u32>>;

    /// TypeScript export for a pool definition
    #[derive(TS)]
    #[ts(export, export_to = "../frontend/src/generated/", rename_all = "camelCase")]
    #[allow(dead_code)]
    pub struct PoolTS {
        pub id: String,
        pub label_key: String,
        pub start: u32,
        pub end: u32,
        pub pad_to: u32,
    }

    /// TypeScript export for a pool requirement
    #[derive(TS)]
    #[ts(export, export_to = "../frontend/src/generated/", rename_all = "camelCase")]
    #[allow(dead_code)]
    pub struct PoolRequirementTS {
        pub min: u32,
        pub max: u32,
        /// Values per ticket, defaults to min
        pub pick: Option<u32>,
    }

    /// TypeScript export for a mode definition
    #[derive(TS)]
    #[ts(export, export_to = "../frontend/src/generated/", rename_all = "camelCase")]
    #[allow(dead_code)]
    pub struct ModeTS {
        pub id: String,
        pub label_key: String,
        pub helper_key: String,
        pub pool_requirements: BTreeMap<String, PoolRequirementTS>,
        pub error_keys: BTreeMap<String, String>,
        pub total_error_key: Option<String>,
    }

    /// TypeScript export for a game definition
    #[derive(TS)]
    #[ts(export, export_to = "../frontend/src/generated/", rename_all = "camelCase")]
    #[allow(dead_code)]
    pub struct GameTS {
        pub id: String,
        pub ticket_prefix: String,
        pub name_key: String,
        pub description_key: String,
        pub hint_key: String,
        pub default_mode_id: String,
        pub pools: Vec<PoolTS>,
        pub modes: Vec<ModeTS>,
    }

    /// TypeScript export for a validation issue
    #[derive(TS)]
    #[ts(export, export_to = "../frontend/src/generated/", tag = "kind", rename_all = "camelCase")]
    #[allow(dead_code)]
    pub enum ValidationIssueTS {
        PoolBounds {
            #[ts(rename = "poolId")]
            pool_id: String,
            #[ts(rename = "labelKey")]
            label_key: String,
            #[ts(rename = "messageKey")]
            message_key: String,
            min: u32,
            max: u32,
            selected: u32,
        },
        InvalidTotal {
            #[ts(rename = "messageKey")]
            message_key: String,
        },
    }

    /// TypeScript export for the live picker state
    #[derive(TS)]
    #[ts(export, export_to = "../frontend/src/generated/", rename_all = "camelCase")]
    #[allow(dead_code)]
    pub struct PickerStateTS {
        pub selections: SelectionTS,
        pub mode_id: String,
        pub style: SelectionStyleTS,
        /// Number of tickets the selection expands into
        pub combinations: u64,
        /// First problem with the selection, if any
        pub validation: Option<ValidationIssueTS>,
        pub is_valid: bool,
    }

    /// TypeScript export for a preview ticket
    #[derive(TS)]
    #[ts(export, export_to = "../frontend/src/generated/", rename_all = "camelCase")]
    #[allow(dead_code)]
    pub struct PreviewTicketTS {
        pub id: String,
        pub selections: SelectionTS,
    }

    /// TypeScript export for a confirmed batch
    #[derive(TS)]
    #[ts(export, export_to = "../frontend/src/generated/", rename_all = "camelCase")]
    #[allow(dead_code)]
    pub struct BatchTS {
        pub id: String,
        pub game_id: String,
        pub mode_id: String,
        pub selections: SelectionTS,
        pub combinations: u64,
        pub preview: Vec<PreviewTicketTS>,
    }

    /// TypeScript export for order totals
    #[derive(TS)]
    #[ts(export, export_to = "../frontend/src/generated/", rename_all = "camelCase")]
    #[allow(dead_code)]
    pub struct OrderTotalsTS {
        pub batch_count: u32,
        pub total_tickets: u64,
        pub total_cost_usd: String,
    }
}

#[cfg(feature = "ts-bindings")]
#[cfg(test)]
mod tests {
    use super::ts_types::*;
    use ts_rs::TS;

    #[test]
    fn export_bindings() {
        // This test generates the TypeScript bindings when run with --features ts-bindings
        SelectionStyleTS::export().expect("Failed to export SelectionStyleTS");
        PoolTS::export().expect("Failed to export PoolTS");
        PoolRequirementTS::export().expect("Failed to export PoolRequirementTS");
        ModeTS::export().expect("Failed to export ModeTS");
        GameTS::export().expect("Failed to export GameTS");
        ValidationIssueTS::export().expect("Failed to export ValidationIssueTS");
        PickerStateTS::export().expect("Failed to export PickerStateTS");
        PreviewTicketTS::export().expect("Failed to export PreviewTicketTS");
        BatchTS::export().expect("Failed to export BatchTS");
        OrderTotalsTS::export().expect("Failed to export OrderTotalsTS");
    }
}
