// prose-core-client/prose-timeline
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use prose_utils::id_string;

id_string!(
    /// Identifies the author of a message as handed in by the transport layer.
    SenderId
);
