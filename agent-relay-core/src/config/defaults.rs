use crate::domain::agent::AgentDescriptor;

pub const DEFAULT_GATEWAY_ENDPOINT: &str = "https://models.inference.ai.azure.com";
pub const DEFAULT_GATEWAY_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_GATEWAY_TEMPERATURE: f32 = 0.7;
pub const DEFAULT_AZURE_API_VERSION: &str = "2024-10-21";

pub const WRITER_AGENT_ID: &str = "writer_agent";
pub const EDITOR_AGENT_ID: &str = "editor_agent";

/// Placeholder replaced by the caller's text in endpoint prompt templates
pub const INPUT_PLACEHOLDER: &str = "{{input}}";

pub const DEFAULT_WRITER_PROMPT: &str = r#"You are a creative story writer. Write a short, engaging story based on the following prompt.
Keep it under 300 words and make it interesting.

Prompt: {{input}}
"#;

pub const DEFAULT_EDITOR_PROMPT: &str = r#"You are a professional text editor. Improve the following text by:
1. Fixing any grammar or spelling issues
2. Enhancing the clarity and flow
3. Improving word choice and sentence structure

Keep the same general meaning and tone, but make the text more polished and professional.

Text to edit: {{input}}
"#;

pub const DEFAULT_ORCHESTRATOR_PROMPT: &str = r#"Your job is to orchestrate multiple agents to complete tasks. Create a plan what to call and when.
Use the tools provided to you to select the right agents to call. Start always with getting the list of available agents.
Iterate on your results and refine your plan based on the responses you get from the agents by calling an agent from the list of available agents.
If you need to call an agent, use the `execute_agent` tool with the agent ID and the JSON payload you want to send."#;

pub const DEFAULT_TASK: &str = "Write a short story about a robot learning to dance.";

/// Agents served by the bundled agents server on its default address.
pub fn default_agents() -> Vec<AgentDescriptor> {
    vec![
        AgentDescriptor::new(
            WRITER_AGENT_ID,
            "Writer Agent",
            "An agent that helps with writing tasks.",
            "http://localhost:8000/writer_agent",
        ),
        AgentDescriptor::new(
            EDITOR_AGENT_ID,
            "Editor Agent",
            "An agent that reviews and edits text, provided by a writer agent.",
            "http://localhost:8000/editor_agent",
        ),
    ]
}
