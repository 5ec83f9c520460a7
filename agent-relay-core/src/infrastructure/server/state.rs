use crate::endpoints::AgentEndpoints;
use crate::relay::DispatchRelay;

pub(crate) struct AgentsState {
    endpoints: AgentEndpoints,
}

impl AgentsState {
    pub(crate) fn new(endpoints: AgentEndpoints) -> Self {
        Self { endpoints }
    }

    pub(crate) fn endpoints(&self) -> &AgentEndpoints {
        &self.endpoints
    }
}

pub(crate) struct RelayState {
    relay: DispatchRelay,
}

impl RelayState {
    pub(crate) fn new(relay: DispatchRelay) -> Self {
        Self { relay }
    }

    pub(crate) fn relay(&self) -> &DispatchRelay {
        &self.relay
    }
}
