use serde::Serialize;

/// How a live field was paired with a saved record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "by", rename_all = "snake_case")]
pub enum FieldMatch {
    /// The live field's identity key is present in the preset
    Identity,
    /// First saved record sharing the live field's `name`
    Name { saved_key: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FillAction {
    /// Saved value written and counted as filled
    Filled,
    /// Field already held data; left untouched
    KeptExisting,
    /// Saved record cannot be applied to this kind of field
    TypeMismatch,
    /// Value applied but did not count as a fill (an unchecked checkbox)
    Unchanged,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldOutcome {
    pub identity: String,
    #[serde(rename = "match")]
    pub matched: FieldMatch,
    pub action: FillAction,
}

/// Outcome of one fill: fields matched in the preset versus fields written.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FillReport {
    pub fields_found: usize,
    pub fields_filled: usize,
    pub outcomes: Vec<FieldOutcome>,
}

impl FillReport {
    pub(crate) fn record(&mut self, identity: String, matched: FieldMatch, action: FillAction) {
        self.fields_found += 1;
        if action == FillAction::Filled {
            self.fields_filled += 1;
        }
        self.outcomes.push(FieldOutcome {
            identity,
            matched,
            action,
        });
    }
}
