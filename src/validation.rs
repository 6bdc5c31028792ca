//! Input validation for simulation requests.
//!
//! Policies assume a well-formed process set; every precondition is
//! checked here, before any simulation begins. Detects:
//! - Empty process sets and empty names
//! - Duplicate process names
//! - Non-positive bursts and negative arrivals
//! - Non-positive Round-Robin quanta
//! - Missing priorities when a priority-aware policy is requested

use std::collections::HashSet;

use thiserror::Error;

use crate::models::{Process, Tick};
use crate::scheduler::Policy;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// No processes were supplied.
    EmptyProcessSet,
    /// A process has an empty name.
    EmptyName,
    /// Two processes share the same name.
    DuplicateName,
    /// A process burst is zero or negative.
    NonPositiveBurst,
    /// A process arrives before t=0.
    NegativeArrival,
    /// A Round-Robin quantum is zero or negative.
    InvalidQuantum,
    /// A priority-aware policy was requested but a process has no priority.
    MissingPriority,
    /// No policies were requested.
    NoPolicies,
    /// The simulation end time is negative.
    NegativeEndTime,
}

impl ValidationError {
    /// Creates a validation error.
    pub fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a process set on its own.
///
/// Checks:
/// 1. At least one process
/// 2. Non-empty, unique names
/// 3. Burst > 0
/// 4. Arrival ≥ 0
pub fn validate_processes(processes: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();
    check_processes(processes, &mut errors);
    into_result(errors)
}

/// Validates a complete simulation request.
///
/// Runs every process check, then:
/// 5. At least one policy
/// 6. Round-Robin quanta > 0
/// 7. Every process has a priority if a priority-aware policy is requested
/// 8. End time ≥ 0
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_request(
    processes: &[Process],
    policies: &[Policy],
    end_time: Tick,
) -> ValidationResult {
    let mut errors = Vec::new();
    check_processes(processes, &mut errors);

    if policies.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::NoPolicies,
            "No scheduling policies requested",
        ));
    }

    for policy in policies {
        check_policy(policy, processes, &mut errors);
    }

    if end_time < 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::NegativeEndTime,
            format!("Simulation end time {end_time} is negative"),
        ));
    }

    into_result(errors)
}

/// Validates a single policy against a process set.
pub fn validate_policy(policy: &Policy, processes: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();
    check_policy(policy, processes, &mut errors);
    into_result(errors)
}

fn check_processes(processes: &[Process], errors: &mut Vec<ValidationError>) {
    if processes.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyProcessSet,
            "Process set is empty",
        ));
    }

    let mut names = HashSet::new();
    for (i, p) in processes.iter().enumerate() {
        if p.name.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyName,
                format!("Process #{} has an empty name", i + 1),
            ));
        } else if !names.insert(p.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateName,
                format!("Duplicate process name: {}", p.name),
            ));
        }

        if p.burst <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!("Process '{}' has non-positive burst {}", p.name, p.burst),
            ));
        }

        if p.arrival < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!("Process '{}' has negative arrival {}", p.name, p.arrival),
            ));
        }
    }
}

fn check_policy(policy: &Policy, processes: &[Process], errors: &mut Vec<ValidationError>) {
    if let Policy::RoundRobin { quantum } = policy {
        if *quantum <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidQuantum,
                format!("Round-Robin quantum must be positive, got {quantum}"),
            ));
        }
    }

    if policy.requires_priority() {
        for p in processes.iter().filter(|p| p.priority.is_none()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::MissingPriority,
                format!("Process '{}' needs a priority for {policy}", p.name),
            ));
        }
    }
}

fn into_result(errors: Vec<ValidationError>) -> ValidationResult {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_processes() -> Vec<Process> {
        vec![
            Process::new("A", 0, 5),
            Process::new("B", 1, 3),
            Process::new("C", 2, 1),
        ]
    }

    fn has_kind(errors: &[ValidationError], kind: ValidationErrorKind) -> bool {
        errors.iter().any(|e| e.kind == kind)
    }

    #[test]
    fn test_valid_input() {
        let policies = [Policy::Fcfs, Policy::round_robin(2), Policy::Hrrn];
        assert!(validate_request(&sample_processes(), &policies, 20).is_ok());
    }

    #[test]
    fn test_empty_process_set() {
        let errors = validate_processes(&[]).unwrap_err();
        assert!(has_kind(&errors, ValidationErrorKind::EmptyProcessSet));
    }

    #[test]
    fn test_duplicate_name() {
        let procs = vec![Process::new("A", 0, 1), Process::new("A", 2, 1)];
        let errors = validate_processes(&procs).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateName && e.message.contains("A")));
    }

    #[test]
    fn test_empty_name() {
        let errors = validate_processes(&[Process::new("  ", 0, 1)]).unwrap_err();
        assert!(has_kind(&errors, ValidationErrorKind::EmptyName));
    }

    #[test]
    fn test_zero_burst() {
        let errors = validate_processes(&[Process::new("A", 0, 0)]).unwrap_err();
        assert!(has_kind(&errors, ValidationErrorKind::NonPositiveBurst));
    }

    #[test]
    fn test_negative_arrival() {
        let errors = validate_processes(&[Process::new("A", -1, 2)]).unwrap_err();
        assert!(has_kind(&errors, ValidationErrorKind::NegativeArrival));
    }

    #[test]
    fn test_invalid_quantum() {
        let errors = validate_policy(&Policy::round_robin(0), &sample_processes()).unwrap_err();
        assert!(has_kind(&errors, ValidationErrorKind::InvalidQuantum));
    }

    #[test]
    fn test_priority_required_only_for_priority_policy() {
        let procs = sample_processes();
        assert!(validate_policy(&Policy::Hrrn, &procs).is_ok());

        let errors = validate_policy(&Policy::Priority, &procs).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(has_kind(&errors, ValidationErrorKind::MissingPriority));

        let with_prio: Vec<Process> = procs.into_iter().map(|p| p.with_priority(1)).collect();
        assert!(validate_policy(&Policy::Priority, &with_prio).is_ok());
    }

    #[test]
    fn test_no_policies_and_negative_end_time() {
        let errors = validate_request(&sample_processes(), &[], -1).unwrap_err();
        assert!(has_kind(&errors, ValidationErrorKind::NoPolicies));
        assert!(has_kind(&errors, ValidationErrorKind::NegativeEndTime));
    }

    #[test]
    fn test_multiple_errors() {
        let procs = vec![Process::new("A", -3, 0), Process::new("A", 0, 1)];
        let errors = validate_request(&procs, &[Policy::round_robin(-2)], 0).unwrap_err();
        assert!(errors.len() >= 4);
    }
}
