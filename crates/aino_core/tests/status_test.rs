use aino_core::{GenerationOutput, JobStatus};

#[test]
fn begin_moves_idle_to_processing() {
    let mut status = JobStatus::Idle;
    assert!(status.begin());
    assert!(status.is_processing());
}

#[test]
fn begin_is_rejected_while_in_flight() {
    let mut status = JobStatus::Processing;
    assert!(!status.begin());
    assert!(status.is_processing());
}

#[test]
fn complete_and_fail_only_apply_while_processing() {
    let mut status = JobStatus::Idle;
    assert!(!status.complete(GenerationOutput::default()));
    assert!(!status.fail("too early".to_string()));
    assert_eq!(status, JobStatus::Idle);

    status.begin();
    assert!(status.complete(GenerationOutput::default()));
    assert!(matches!(status, JobStatus::Completed(_)));
}

#[test]
fn failure_retains_message_and_allows_resubmission() {
    let mut status = JobStatus::Processing;
    assert!(status.fail("Generation failed".to_string()));
    assert_eq!(status, JobStatus::Failed("Generation failed".to_string()));

    assert!(status.begin());
    assert!(status.is_processing());
}

#[test]
fn completion_allows_resubmission() {
    let output = GenerationOutput::builder()
        .heading("Otsikko".to_string())
        .build()
        .unwrap();
    let mut status = JobStatus::Processing;
    status.complete(output);
    assert!(status.begin());
}
