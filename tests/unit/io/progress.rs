//! Tests for progress tracking across batch sizes

#[cfg(test)]
mod tests {
    use edgematch::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;
    use edgematch::io::progress::ProgressManager;
    use std::path::Path;
    use std::time::Duration;

    // Tests ProgressManager construction and a full file lifecycle
    // Verified by setting wrong initial state
    #[test]
    fn test_progress_manager_lifecycle() {
        let mut pm = ProgressManager::new();

        pm.initialize(0);
        pm.finish();

        pm.initialize(1);
        pm.start_file(0, Path::new("test.puzzle"));
        pm.complete_file(0, 4, Duration::from_millis(100));
        pm.finish();
    }

    // Tests default trait implementation
    // Verified by creating different initial states
    #[test]
    fn test_progress_manager_default() {
        let mut pm = ProgressManager::default();
        pm.initialize(2);
        pm.start_file(0, Path::new("a.puzzle"));
        pm.start_file(1, Path::new("b.puzzle"));
        pm.complete_file(0, 0, Duration::from_millis(10));
        pm.complete_file(1, 2, Duration::from_millis(20));
        pm.finish();
    }

    // Tests batch mode above the individual bar threshold
    // Verified by creating a spinner per file regardless of batch size
    #[test]
    fn test_batch_mode() {
        let mut pm = ProgressManager::new();
        let file_count = MAX_INDIVIDUAL_PROGRESS_BARS + 3;
        pm.initialize(file_count);

        for index in 0..file_count {
            pm.start_file(index, Path::new("batch.puzzle"));
            pm.complete_file(index, 1, Duration::from_millis(5));
        }
        pm.finish();
    }

    // Tests that out-of-range file indices are ignored
    // Verified by indexing the bar list unchecked
    #[test]
    fn test_out_of_range_index() {
        let mut pm = ProgressManager::new();
        pm.initialize(1);
        pm.start_file(5, Path::new("late.puzzle"));
        pm.complete_file(5, 0, Duration::from_millis(1));
        pm.finish();
    }
}
