// Copyright 2025 the Glint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Detached snapshots and the process-wide clipboard value.
//!
//! A [`Snapshot`] is a deep, independent copy of one target's full property
//! set at the moment of copy. Because copy and paste are user-driven and
//! may be arbitrarily far apart in time, the snapshot must stay stable even
//! if the source target is edited or deleted in between; it never aliases
//! the live source.
//!
//! [`Clipboard`] is the single value shared across otherwise-independent
//! inspector sessions: the host owns exactly one and threads it through.
//! Every copy replaces the held snapshot wholesale.

use alloc::collections::BTreeSet;
use alloc::string::String;
use alloc::vec::Vec;
use hashbrown::HashMap;

use glint_schema::{PropertyDescriptor, PropertyValue, SchemaMetadata};

use crate::capability::Mutator;
use crate::error::NoSource;

/// A deep, detached copy of a target's full property state.
#[derive(Clone, Debug)]
pub struct Snapshot {
    values: HashMap<String, PropertyValue>,
    keywords: BTreeSet<String>,
    render_order: i32,
}

impl Snapshot {
    /// Deep-copies every property value, the keyword set, and the render
    /// order of `source`.
    ///
    /// Properties the mutator reports no value for are omitted from the
    /// snapshot.
    #[must_use]
    pub fn capture<T: Copy, M: Mutator<T>>(
        source: T,
        schema: &SchemaMetadata,
        mutator: &M,
    ) -> Self {
        let mut values = HashMap::with_capacity(schema.len());
        for (_, descriptor) in schema.iter() {
            if let Some(value) = mutator.value(source, descriptor.name(), descriptor.kind()) {
                values.insert(descriptor.name().into(), value);
            }
        }
        Self {
            values,
            keywords: mutator.keywords(source),
            render_order: mutator.render_order(source),
        }
    }

    /// Returns the captured value for a property, if any.
    #[must_use]
    pub fn value(&self, name: &str) -> Option<&PropertyValue> {
        self.values.get(name)
    }

    /// Returns the number of captured property values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if no property values were captured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns an iterator over captured (name, value) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropertyValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Returns the captured keyword set.
    #[must_use]
    pub fn keywords(&self) -> &BTreeSet<String> {
        &self.keywords
    }

    /// Returns the captured render order.
    #[must_use]
    pub fn render_order(&self) -> i32 {
        self.render_order
    }
}

/// The process-wide clipboard: one snapshot plus the copied-property list.
///
/// `copied_props` is recorded by single-property copy and pairs the source
/// anchor and its linked extra slots positionally with the destination's at
/// paste time. Whole-target copy clears it.
#[derive(Clone, Debug, Default)]
pub struct Clipboard {
    snapshot: Option<Snapshot>,
    copied_props: Vec<String>,
}

impl Clipboard {
    /// Creates an empty clipboard.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the held snapshot, if a copy has happened.
    #[must_use]
    pub fn snapshot(&self) -> Option<&Snapshot> {
        self.snapshot.as_ref()
    }

    /// Returns the recorded copied-property list (anchor first).
    ///
    /// Empty unless the last copy was a single-property copy.
    #[must_use]
    pub fn copied_props(&self) -> &[String] {
        &self.copied_props
    }

    /// Returns `true` if a snapshot is held.
    #[must_use]
    pub fn has_snapshot(&self) -> bool {
        self.snapshot.is_some()
    }

    /// Returns `true` if single-property paste has something to apply.
    #[must_use]
    pub fn can_paste_property(&self) -> bool {
        self.snapshot.is_some() && !self.copied_props.is_empty()
    }

    /// Copies the full property set of `source`, replacing any held
    /// snapshot and clearing the copied-property list.
    ///
    /// Fails with [`NoSource`] when nothing is selected; the clipboard is
    /// left unchanged in that case.
    pub fn copy_all<T: Copy, M: Mutator<T>>(
        &mut self,
        source: Option<T>,
        schema: &SchemaMetadata,
        mutator: &M,
    ) -> Result<(), NoSource> {
        let source = source.ok_or(NoSource)?;
        self.snapshot = Some(Snapshot::capture(source, schema, mutator));
        self.copied_props.clear();
        Ok(())
    }

    /// Copies the full property set of `source` and records `descriptor`
    /// plus its linked extra slots for positional fan-out at paste time.
    pub fn copy_property<T: Copy, M: Mutator<T>>(
        &mut self,
        source: Option<T>,
        descriptor: &PropertyDescriptor,
        schema: &SchemaMetadata,
        mutator: &M,
    ) -> Result<(), NoSource> {
        let source = source.ok_or(NoSource)?;
        self.snapshot = Some(Snapshot::capture(source, schema, mutator));
        self.copied_props.clear();
        self.copied_props.push(descriptor.name().into());
        for extra in descriptor.extra_props() {
            self.copied_props.push(extra.clone());
        }
        Ok(())
    }

    /// Discards the held snapshot and copied-property list.
    pub fn clear(&mut self) {
        self.snapshot = None;
        self.copied_props.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec;
    use glint_schema::{PropertySpec, ValueKind};

    struct FixedMutator {
        metallic: f32,
    }

    impl Mutator<u32> for FixedMutator {
        fn value(&self, _target: u32, name: &str, kind: ValueKind) -> Option<PropertyValue> {
            match (name, kind) {
                ("_Metallic", ValueKind::Scalar) => Some(PropertyValue::Scalar(self.metallic)),
                ("_Color", ValueKind::Vector) => {
                    Some(PropertyValue::Vector([1.0, 0.5, 0.25, 1.0]))
                }
                _ => None,
            }
        }

        fn set_value(&mut self, _target: u32, _name: &str, _value: &PropertyValue) {}

        fn keywords(&self, _target: u32) -> BTreeSet<String> {
            BTreeSet::from(["_EMISSION_ON".to_string()])
        }

        fn set_keywords(&mut self, _target: u32, _keywords: &BTreeSet<String>) {}

        fn render_order(&self, _target: u32) -> i32 {
            2450
        }

        fn set_render_order(&mut self, _target: u32, _order: i32) {}
    }

    fn schema() -> SchemaMetadata {
        SchemaMetadata::build(vec![
            PropertySpec::new("_Color", "Albedo Color", ValueKind::Vector).extra("_Metallic"),
            PropertySpec::new("_Metallic", "Metallic", ValueKind::Scalar),
            PropertySpec::new("_Bump", "Normal Map", ValueKind::Texture),
        ])
        .unwrap()
    }

    #[test]
    fn capture_copies_values_keywords_and_order() {
        let schema = schema();
        let mutator = FixedMutator { metallic: 0.5 };
        let snapshot = Snapshot::capture(1_u32, &schema, &mutator);

        assert_eq!(snapshot.len(), 2);
        assert_eq!(
            snapshot.value("_Metallic"),
            Some(&PropertyValue::Scalar(0.5))
        );
        // The mutator reported no value for _Bump, so it is omitted.
        assert!(snapshot.value("_Bump").is_none());
        assert!(snapshot.keywords().contains("_EMISSION_ON"));
        assert_eq!(snapshot.render_order(), 2450);
    }

    #[test]
    fn snapshot_is_independent_of_later_edits() {
        let schema = schema();
        let mut mutator = FixedMutator { metallic: 0.5 };
        let snapshot = Snapshot::capture(1_u32, &schema, &mutator);

        mutator.metallic = 0.9;
        assert_eq!(
            snapshot.value("_Metallic"),
            Some(&PropertyValue::Scalar(0.5))
        );
    }

    #[test]
    fn copy_all_requires_a_source() {
        let schema = schema();
        let mutator = FixedMutator { metallic: 0.5 };
        let mut clipboard = Clipboard::new();

        assert_eq!(
            clipboard.copy_all::<u32, _>(None, &schema, &mutator),
            Err(NoSource)
        );
        assert!(!clipboard.has_snapshot());

        clipboard.copy_all(Some(1_u32), &schema, &mutator).unwrap();
        assert!(clipboard.has_snapshot());
        assert!(clipboard.copied_props().is_empty());
        assert!(!clipboard.can_paste_property());
    }

    #[test]
    fn copy_property_records_anchor_and_extras() {
        let schema = schema();
        let mutator = FixedMutator { metallic: 0.5 };
        let mut clipboard = Clipboard::new();

        let color = schema.lookup("_Color").unwrap();
        clipboard
            .copy_property(Some(1_u32), color, &schema, &mutator)
            .unwrap();

        assert_eq!(clipboard.copied_props(), ["_Color", "_Metallic"]);
        assert!(clipboard.can_paste_property());

        // A later whole-target copy replaces the list.
        clipboard.copy_all(Some(1_u32), &schema, &mutator).unwrap();
        assert!(clipboard.copied_props().is_empty());
    }

    #[test]
    fn clear_discards_everything() {
        let schema = schema();
        let mutator = FixedMutator { metallic: 0.5 };
        let mut clipboard = Clipboard::new();

        clipboard.copy_all(Some(1_u32), &schema, &mutator).unwrap();
        clipboard.clear();
        assert!(!clipboard.has_snapshot());
        assert!(!clipboard.can_paste_property());
    }
}
