use protodef_schema::*;

fn variants() -> Vec<EnumConstant> {
    vec![
        EnumConstant::new("VARIANT_Z", 0).with_description("This is variant Z"),
        EnumConstant::new("VARIANT_A", 1).with_description("This is variant A"),
        EnumConstant::new("VARIANT_B", 2).with_description("This is variant B"),
    ]
}

fn basic_fields(message: Message) -> Message {
    message
        .with_field(MessageField::new(1, "name", "string").with_description("This is required string field"))
        .with_field(
            MessageField::new(2, "num", "uint32")
                .optional()
                .with_description("This is optional numeric field"),
        )
        .with_field(
            MessageField::new(3, "global_enum", "GlobalEnum")
                .optional()
                .with_description("This is optional enum field"),
        )
}

/// The schema behind `testdata/example.proto`.
pub fn example_proto() -> Proto {
    let basic = basic_fields(Message::new("BasicType").with_description("This message contains basic types"));

    let list = Message::new("ListType")
        .with_description("This message contains list types")
        .with_field(MessageField::new(1, "names", "string").repeated().with_description("This is list of strings"))
        .with_field(MessageField::new(2, "num", "uint32").repeated().with_description("This is list of numbers"))
        .with_field(
            MessageField::new(3, "global_enums", "GlobalEnum")
                .repeated()
                .with_description("This is list of enums"),
        );

    let nested = basic_fields(
        Message::new("NestedMessage")
            .with_description("This is a nested message")
            .with_enum(
                Enum::new("DoublyNestedEnum", variants())
                    .with_description("This is a double nested Enum with message scope"),
            ),
    );

    let complex = Message::new("ComplexType")
        .with_description("This message contains complex types")
        .with_field(MessageField::new(1, "basic", "BasicType").with_description("This holds BasicType"))
        .with_field(MessageField::new(2, "list", "ListType").with_description("This holds ListType"))
        .with_field(
            MessageField::new(3, "nested_message", "NestedMessage").with_description("This holds NestedMessage"),
        )
        .with_field(MessageField::new(4, "nested_enum", "NestedEnum").with_description("This holds NestedEnum"))
        .with_field(
            MessageField::new(5, "doubly_nested_enum", "NestedMessage.DoublyNestedEnum")
                .with_description("This holds DoublyNestedEnum"),
        )
        .with_enum(Enum::new("NestedEnum", variants()).with_description("This is an Enum with message scope"))
        .with_message(nested);

    let basic_service = Service::new(
        "BasicService",
        vec![
            ServiceMethod::new("GetBasic", "google.protobuf.Empty", "BasicType").with_description("Get BasicType"),
            ServiceMethod::new("PushBasic", "BasicType", "google.protobuf.Empty").with_description("Push BasicType"),
        ],
    )
    .with_description("This is a service exercising BasicType");

    let complex_service = Service::new(
        "ComplexService",
        vec![
            ServiceMethod::new("StreamRequest", "BasicType", "google.protobuf.Empty")
                .streaming_request()
                .with_description("RPC with streaming request"),
            ServiceMethod::new("StreamResponse", "google.protobuf.Empty", "BasicType")
                .streaming_response()
                .with_description("RPC with streaming response"),
            ServiceMethod::new("StreamRequestResponse", "BasicType", "ComplexType")
                .streaming_request()
                .streaming_response()
                .with_description("RPC with bidirectional streaming"),
        ],
    )
    .with_description("This is a service exercising ComplexType");

    Proto::new("example")
        .with_description("This is an example file\nAutogenerated by protodefgen")
        .with_import("google/protobuf/empty.proto")
        .with_enum(Enum::new("GlobalEnum", variants()).with_description("This is an Enum with global scope"))
        .with_message(basic)
        .with_message(list)
        .with_message(complex)
        .with_service(basic_service)
        .with_service(complex_service)
}
