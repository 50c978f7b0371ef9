// prose-core-client/prose-timeline
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use prose_utils::id_string;

// The ID assigned to the message by the transport. Confirmed and pending messages share the
// same ID space.
id_string!(MessageId);
