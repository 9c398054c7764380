// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::fmt;
use std::sync::Arc;

type Stage<T> = Arc<dyn Fn(T) -> T + Send + Sync>;

/// Ordered list of pure transforms applied as one composed function.
///
/// Stages run in the order they were added. A pipeline is cheap to clone and
/// holds no state between items.
///
/// ```
/// use reflow_exec::Pipeline;
///
/// let pipeline = Pipeline::new()
///     .then(|t: i32| t - 32)
///     .then(|t| t * 5)
///     .then(|t| t / 9);
///
/// assert_eq!(pipeline.apply(212), 100);
/// ```
pub struct Pipeline<T> {
    stages: Vec<Stage<T>>,
}

impl<T> Pipeline<T> {
    #[must_use]
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    /// Appends `stage` after the existing ones.
    #[must_use]
    pub fn then<F>(mut self, stage: F) -> Self
    where
        F: Fn(T) -> T + Send + Sync + 'static,
    {
        self.stages.push(Arc::new(stage));
        self
    }

    pub fn apply(&self, item: T) -> T {
        self.stages.iter().fold(item, |item, stage| stage(item))
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }
}

impl<T> Default for Pipeline<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Pipeline<T> {
    fn clone(&self) -> Self {
        Self {
            stages: self.stages.clone(),
        }
    }
}

impl<T> fmt::Debug for Pipeline<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline")
            .field("stages", &self.stages.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::Pipeline;

    #[test]
    fn empty_pipeline_is_identity() {
        let pipeline = Pipeline::<&str>::new();
        assert!(pipeline.is_empty());
        assert_eq!(pipeline.apply("New York"), "New York");
    }

    #[test]
    fn stages_apply_in_insertion_order() {
        let add_then_double = Pipeline::new().then(|x: i32| x + 1).then(|x| x * 2);
        let double_then_add = Pipeline::new().then(|x: i32| x * 2).then(|x| x + 1);

        assert_eq!(add_then_double.apply(3), 8);
        assert_eq!(double_then_add.apply(3), 7);
        assert_eq!(add_then_double.len(), 2);
    }

    #[test]
    fn clones_share_stages() {
        let pipeline = Pipeline::new().then(|s: String| s.to_uppercase());
        let clone = pipeline.clone();

        assert_eq!(clone.apply("chicago".to_string()), "CHICAGO");
        assert_eq!(pipeline.apply("chicago".to_string()), "CHICAGO");
    }
}
