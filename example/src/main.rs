// example/src/main.rs
//
// Builds a small order-tracking schema in code and renders it. With a path
// argument the result is written there, otherwise it is printed to stdout.
// Set RUST_LOG=debug to watch the renderer walk the tree.

use std::env;
use std::path::PathBuf;

use log::info;
use protodef::*;

fn order_schema() -> Proto {
    let status = Enum::new(
        "Status",
        vec![
            EnumConstant::new("STATUS_UNSPECIFIED", 0),
            EnumConstant::new("STATUS_PLACED", 1).with_description("Accepted, not yet shipped"),
            EnumConstant::new("STATUS_SHIPPED", 2),
        ],
    );

    let line = Message::new("Line")
        .with_field(MessageField::new(1, "sku", "string"))
        .with_field(MessageField::new(2, "quantity", "uint32"));

    let order = Message::new("Order")
        .with_description("A customer order.\nLines are kept in the order they were added.")
        .with_message(line)
        .with_field(MessageField::new(1, "id", "string"))
        .with_field(MessageField::new(2, "lines", "Line").repeated())
        .with_field(MessageField::new(3, "status", "Status"))
        .with_field(MessageField::new(4, "note", "string").optional());

    let orders = Service::new(
        "Orders",
        vec![
            ServiceMethod::new("Place", "Order", "google.protobuf.Empty"),
            ServiceMethod::new("Track", "google.protobuf.Empty", "Order")
                .streaming_response()
                .with_description("Streams every status change"),
        ],
    );

    Proto::new("shop.orders")
        .with_description("Order tracking API")
        .with_import("google/protobuf/empty.proto")
        .with_enum(status)
        .with_message(order)
        .with_service(orders)
}

fn main() -> Result<()> {
    env_logger::init();

    let proto = order_schema();
    let options = RenderOptions::default().with_indent_width(4);

    match env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => {
            proto.write_proto_def(&options, &path)?;
            info!("wrote {}", path.display());
            println!("Generated proto written to {}", path.display());
        }
        None => print!("{}", proto.to_proto_def(&options)?),
    }

    Ok(())
}
