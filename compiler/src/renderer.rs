use log::{debug, trace, warn};
use protodef_schema::{Enum, Message, Proto, Service};

use crate::{
    emitter::Emitter,
    error::Result,
    options::RenderOptions,
    verifier::{
        scope_path, verify_constant, verify_enum_constants, verify_enum_name, verify_field,
        verify_import, verify_message_name, verify_method, verify_package,
        verify_service_name,
    },
};

pub const SYNTAX: &str = "proto3";

/// Renders `proto` to `.proto` source text.
///
/// The tree is walked once, depth first. Every node is checked just before
/// it is written, and the first violation aborts the render; no partial text
/// is returned.
pub fn render_proto(proto: &Proto, options: &RenderOptions) -> Result<String> {
    Renderer::new(options).render(proto)
}

struct Renderer<'a> {
    options: &'a RenderOptions,
    out:     Emitter,
}

impl<'a> Renderer<'a> {
    fn new(options: &'a RenderOptions) -> Self {
        Renderer {
            options,
            out: Emitter::new(options.indent_width),
        }
    }

    fn render(mut self, proto: &Proto) -> Result<String> {
        debug!(
            "package: {:?}, imports: {}, enums: {}, messages: {}, services: {}",
            proto.package,
            proto.imports.len(),
            proto.enums.len(),
            proto.messages.len(),
            proto.services.len()
        );

        if !proto.description.is_empty() {
            self.out.write_description(&proto.description, 0);
            self.out.blank_line();
        }

        self.out.write_line(&format!("syntax = \"{}\";", SYNTAX), 0);
        self.out.blank_line();

        verify_package(&proto.package)?;
        self.out.write_line(&format!("package {};", proto.package), 0);
        self.out.blank_line();

        for (index, import) in proto.imports.iter().enumerate() {
            verify_import(import, index)?;
            self.out.write_line(&format!("import \"{}\";", import), 0);
        }
        if !proto.imports.is_empty() {
            self.out.blank_line();
        }

        let scope = proto.package.as_str();
        for (index, enum_) in proto.enums.iter().enumerate() {
            self.append_enum(enum_, scope, index, 0)?;
        }
        for (index, message) in proto.messages.iter().enumerate() {
            self.append_message(message, scope, index, 0)?;
        }

        if self.options.services_enabled {
            for (index, service) in proto.services.iter().enumerate() {
                self.append_service(service, scope, index, 0)?;
            }
        } else if !proto.services.is_empty() {
            warn!(
                "services are disabled, skipping {} service(s) in package {:?}",
                proto.services.len(),
                proto.package
            );
        }

        Ok(self.out.finish())
    }

    fn append_enum(&mut self, enum_: &Enum, scope: &str, index: usize, depth: usize) -> Result<()> {
        verify_enum_name(enum_, scope, index)?;
        let enum_name = scope_path(scope, &enum_.name);
        debug!("  enum: {:?}", enum_name);

        self.out.write_description(&enum_.description, depth);
        self.out.write_line(&format!("enum {} {{", enum_.name), depth);

        verify_enum_constants(enum_, &enum_name)?;
        for (index, constant) in enum_.constants.iter().enumerate() {
            verify_constant(constant, &enum_name, index)?;
            trace!("    constant: {:?} = {}", constant.name, constant.value);
            self.out.write_description(&constant.description, depth + 1);
            self.out
                .write_line(&format!("{} = {};", constant.name, constant.value), depth + 1);
        }

        self.out.close_block(depth);
        Ok(())
    }

    fn append_message(
        &mut self,
        message: &Message,
        scope:   &str,
        index:   usize,
        depth:   usize,
    ) -> Result<()> {
        verify_message_name(message, scope, index)?;
        let message_name = scope_path(scope, &message.name);
        debug!("  message: {:?}", message_name);

        self.out.write_description(&message.description, depth);
        self.out.write_line(&format!("message {} {{", message.name), depth);

        // Nested declarations always come before the fields.
        for (index, enum_) in message.enums.iter().enumerate() {
            self.append_enum(enum_, &message_name, index, depth + 1)?;
        }
        for (index, nested) in message.messages.iter().enumerate() {
            self.append_message(nested, &message_name, index, depth + 1)?;
        }

        for (index, field) in message.fields.iter().enumerate() {
            verify_field(field, &message_name, index, self.options.strict_field_id)?;
            trace!("    field: {:?}, type: {:?}, id: {}", field.name, field.type_, field.id);
            self.out.write_description(&field.description, depth + 1);
            self.out.write_line(
                &format!(
                    "{}{} {} = {};",
                    field.cardinality(),
                    field.type_,
                    field.name,
                    field.id
                ),
                depth + 1,
            );
        }

        self.out.close_block(depth);
        Ok(())
    }

    fn append_service(
        &mut self,
        service: &Service,
        scope:   &str,
        index:   usize,
        depth:   usize,
    ) -> Result<()> {
        verify_service_name(service, scope, index)?;
        let service_name = scope_path(scope, &service.name);
        debug!("  service: {:?}", service_name);

        self.out.write_description(&service.description, depth);
        self.out.write_line(&format!("service {} {{", service.name), depth);

        for (index, method) in service.methods.iter().enumerate() {
            verify_method(method, &service_name, index)?;
            trace!("    method: {:?}", method.name);

            let stream_req = if method.stream_request { "stream " } else { "" };
            let stream_res = if method.stream_response { "stream " } else { "" };

            self.out.write_description(&method.description, depth + 1);
            self.out.write_line(
                &format!(
                    "rpc {}({}{}) returns ({}{});",
                    method.name, stream_req, method.request, stream_res, method.response
                ),
                depth + 1,
            );
        }

        self.out.close_block(depth);
        Ok(())
    }
}
