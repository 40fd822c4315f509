//! Box inventory use-case: `vagrant box list`.

use crate::application::dispatcher::CommandDispatcher;
use crate::application::ports::CommandExecutor;
use crate::domain::options::box_list_args;
use crate::domain::{VagrantBox, VagrantError, aggregate_boxes};

/// List locally cached boxes, in the order Vagrant reports them.
///
/// # Errors
///
/// Returns [`VagrantError::Invocation`] if `vagrant box list` fails.
pub async fn list(
    dispatcher: &CommandDispatcher<impl CommandExecutor>,
) -> Result<Vec<VagrantBox>, VagrantError> {
    let records = dispatcher.execute(&box_list_args()).await.into_result()?;
    Ok(aggregate_boxes(&records))
}
