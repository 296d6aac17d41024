// Mirrors the DDL in `schema_manager`.

diesel::table! {
    branch (id) {
        id -> Int4,
        name -> Text,
        state -> Text,
        city -> Text,
        street -> Text,
        date -> Date,
    }
}

diesel::table! {
    person (id) {
        id -> Int4,
        first_name -> Text,
        last_name -> Text,
        gender -> Text,
        phone_number -> Text,
    }
}

diesel::table! {
    employee (id) {
        id -> Int4,
        branch_id -> Int4,
        post -> Text,
        degree -> Text,
        birth_date -> Date,
        salary -> Float4,
        state -> Text,
        married -> Text,
    }
}

diesel::table! {
    customer (id) {
        id -> Int4,
    }
}

diesel::table! {
    salon (id) {
        id -> Int4,
        capacity -> Int4,
        #[sql_name = "type"]
        kind -> Text,
        floor -> Int4,
    }
}

diesel::table! {
    orders (id) {
        id -> Int4,
        customer_id -> Int4,
        waiter_id -> Int4,
        accountant_id -> Int4,
        salon_id -> Int4,
        order_date -> Date,
        reg_time -> Time,
        total_cost -> Float4,
    }
}

diesel::table! {
    food (id) {
        id -> Int4,
        chef_id -> Int4,
        name -> Text,
        #[sql_name = "type"]
        kind -> Text,
        cost -> Float4,
    }
}

diesel::table! {
    order_foods (id) {
        id -> Int4,
        order_id -> Int4,
        food_id -> Int4,
    }
}

diesel::joinable!(employee -> branch (branch_id));
diesel::joinable!(employee -> person (id));
diesel::joinable!(customer -> person (id));
diesel::joinable!(food -> employee (chef_id));
diesel::joinable!(orders -> customer (customer_id));
diesel::joinable!(orders -> salon (salon_id));
diesel::joinable!(order_foods -> orders (order_id));
diesel::joinable!(order_foods -> food (food_id));

diesel::allow_tables_to_appear_in_same_query!(
    branch,
    person,
    employee,
    customer,
    salon,
    orders,
    food,
    order_foods,
);
