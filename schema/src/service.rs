use serde::{Deserialize, Serialize};

/// An RPC service. Services do not nest.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Service {
    pub description: String,
    pub name:        String,
    pub methods:     Vec<ServiceMethod>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceMethod {
    pub description:     String,
    pub name:            String,
    pub request:         String,
    pub stream_request:  bool,
    pub response:        String,
    pub stream_response: bool,
}

impl Service {
    pub fn new(name: impl Into<String>, methods: Vec<ServiceMethod>) -> Self {
        Service {
            name: name.into(),
            methods,
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

impl ServiceMethod {
    pub fn new(
        name:     impl Into<String>,
        request:  impl Into<String>,
        response: impl Into<String>,
    ) -> Self {
        ServiceMethod {
            name: name.into(),
            request: request.into(),
            response: response.into(),
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn streaming_request(mut self) -> Self {
        self.stream_request = true;
        self
    }

    pub fn streaming_response(mut self) -> Self {
        self.stream_response = true;
        self
    }
}
