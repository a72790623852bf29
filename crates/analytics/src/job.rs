use crate::result::JobError;

/// A self-contained analysis unit.
///
/// Jobs take their full input up front and carry no state between runs.
/// This crate stays storage-agnostic: inputs are provided by callers.
pub trait AnalysisJob: Send + Sync + 'static {
    type Input: Send + Sync + 'static;
    type Output;

    /// The input the job will analyze.
    fn input(&self) -> &Self::Input;

    /// Execute the analysis.
    ///
    /// Must not mutate the input; a failure yields no partial output.
    fn run(&self) -> Result<Self::Output, JobError>;
}
