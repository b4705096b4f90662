//! GraphQL documents sent to the booking backend. Kept as plain strings;
//! the backend owns the schema and this service only forwards them.

pub const MUTATION_LOGIN: &str = r#"
    mutation Login($email: String!, $password: String!) {
        login(email: $email, password: $password) {
            token
            admin { id name email }
        }
    }
"#;

pub const MUTATION_CREATE_BOOKING: &str = r#"
    mutation CreateBooking(
        $name: String!
        $contact: String!
        $email: String!
        $details: [BookingDetailInput!]!
        $institution: String
        $suratUrl: String
        $isAcademic: Boolean
    ) {
        createBooking(
            name: $name
            contact: $contact
            email: $email
            institution: $institution
            suratUrl: $suratUrl
            isAcademic: $isAcademic
            details: $details
        ) {
            bookingCode
            status
            totalPrice
            details {
                fieldId
                bookingDate
                startHour
                pricePerHour
            }
        }
    }
"#;

pub const MUTATION_UPDATE_BOOKING_STATUS: &str = r#"
    mutation UpdateBookingStatus($bookingCode: String!, $status: BookingStatus!) {
        updateStatusBooking(bookingCode: $bookingCode, status: $status) {
            bookingCode
            status
        }
    }
"#;

pub const MUTATION_UPDATE_PAYMENT: &str = r#"
    mutation UpdatePayment($bookingCode: String!, $paymentStatus: PaymentStatus!) {
        updatePaymentStatus(bookingCode: $bookingCode, paymentStatus: $paymentStatus) {
            bookingCode
        }
    }
"#;

pub const QUERY_GET_BOOKINGS: &str = r#"
    query Bookings($venueId: ID, $date: DateTime, $startDate: DateTime, $endDate: DateTime) {
        bookings(venueId: $venueId, date: $date, startDate: $startDate, endDate: $endDate) {
            id
            bookingCode
            name
            contact
            email
            isAcademic
            status
            paymentStatus
            totalPrice
            createdAt
            details {
                fieldId
                bookingDate
                startHour
                subtotal
            }
        }
    }
"#;

pub const QUERY_GET_BOOKING_BY_CODE: &str = r#"
    query BookingByCode($bookingCode: String!) {
        booking(bookingCode: $bookingCode) {
            id
            bookingCode
            name
            contact
            email
            isAcademic
            status
            paymentStatus
            totalPrice
            createdAt
            details {
                fieldId
                bookingDate
                startHour
                subtotal
            }
        }
    }
"#;

/// Non-terminal bookings touching one field on one date; the input to
/// the availability check.
pub const QUERY_CHECK_AVAILABILITY: &str = r#"
    query CheckBookingAvailability($fieldId: ID!, $date: String!) {
        bookings(fieldId: $fieldId, date: $date, statusNotIn: [CANCELLED, REJECTED]) {
            id
            bookingCode
            details {
                fieldId
                bookingDate
                startHour
            }
        }
    }
"#;

pub const QUERY_GET_FIELDS: &str = r#"
    query Fields($venueId: ID) {
        fields(venueId: $venueId) {
            id
            name
            status
            venueId
            Venue { id name }
        }
    }
"#;

pub const QUERY_GET_FIELD_BY_ID: &str = r#"
    query FieldById($id: ID!) {
        field(id: $id) {
            id
            name
            status
            venueId
            Venue { id name }
        }
    }
"#;

pub const MUTATION_CREATE_FIELD: &str = r#"
    mutation CreateField($name: String!, $venueId: ID!, $status: String) {
        createField(name: $name, venueId: $venueId, status: $status) {
            id
            name
            status
            venueId
        }
    }
"#;

pub const MUTATION_UPDATE_FIELD: &str = r#"
    mutation UpdateField($id: ID!, $name: String, $venueId: ID, $status: String) {
        updateField(id: $id, name: $name, venueId: $venueId, status: $status) {
            id
            name
            status
            venueId
        }
    }
"#;

pub const QUERY_GET_VENUES: &str = r#"
    query Venues {
        venues {
            id
            name
        }
    }
"#;

pub const QUERY_GET_VENUE_BY_ID: &str = r#"
    query VenueById($id: ID!) {
        venue(id: $id) {
            id
            name
        }
    }
"#;

pub const MUTATION_CREATE_VENUE: &str = r#"
    mutation CreateVenue($name: String!) {
        createVenue(name: $name) {
            id
            name
        }
    }
"#;

pub const MUTATION_UPDATE_VENUE: &str = r#"
    mutation UpdateVenue($id: ID!, $name: String!) {
        updateVenue(id: $id, name: $name) {
            id
            name
        }
    }
"#;

pub const QUERY_GET_OPERATING_HOURS: &str = r#"
    query OperatingHours($venueId: ID) {
        operatingHours(venueId: $venueId) {
            id
            venueId
            openHour
            closeHour
        }
    }
"#;

pub const MUTATION_CREATE_OPERATING_HOUR: &str = r#"
    mutation CreateOperatingHour($venueId: ID!, $openHour: Int!, $closeHour: Int!) {
        createOperatingHour(venueId: $venueId, openHour: $openHour, closeHour: $closeHour) {
            id
            venueId
            openHour
            closeHour
        }
    }
"#;

pub const MUTATION_UPDATE_OPERATING_HOUR: &str = r#"
    mutation UpdateOperatingHour($id: ID!, $openHour: Int!, $closeHour: Int!) {
        updateOperatingHour(id: $id, openHour: $openHour, closeHour: $closeHour) {
            id
            venueId
            openHour
            closeHour
        }
    }
"#;
