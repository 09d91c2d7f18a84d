// Voice agent with human-in-the-loop confirmation support.
// The agent prompt asks the model to emit a confirmation_required JSON
// object when it detects an action intent; everything else is freeform text.

pub mod confirmation;
pub mod handlers;
pub mod prompts;
